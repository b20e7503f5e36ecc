//! Desktop controller: typed event dispatch over the scene.
//!
//! Every pointer-down resolves the topmost hit node to a [`Target`] --
//! the typed replacement for walking CSS classes up from an event target
//! -- and one `match` dispatches it. The controller owns the window
//! manager, explorer, start menu, toasts, scheduler, and the single
//! drag session.

use atrium_scene::SceneRegistry;
use atrium_types::geometry::{Point, Rect, Size};
use atrium_types::input::{InputEvent, Key};
use atrium_types::role::Role;

use crate::clock;
use crate::config::ShellConfig;
use crate::explorer::WorkExplorer;
use crate::forms;
use crate::icons::IconRegistry;
use crate::sched::{Scheduler, TaskAction};
use crate::services::{LinkService, TimeService};
use crate::startmenu::StartMenu;
use crate::theme;
use crate::toast::ToastManager;
use crate::wm::WindowManager;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Quit,
}

/// What a pointer-down landed on, resolved once from the hit node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Icon { target: String },
    MenubarLink { target: String },
    CloseButton { window: String },
    MinimizeButton { window: String },
    Titlebar { window: String },
    WindowBody,
    StartButton,
    StartMenuPanel,
    StartMenuItem { target: String },
    SidebarFolder { folder: String },
    Desktop,
    Other,
    Miss,
}

/// The active drag: which window, and the pointer's grab offset from the
/// window origin. Exclusively owned here; at most one drag at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DragSession {
    window: String,
    grab_dx: i32,
    grab_dy: i32,
}

/// Owns all desktop state and dispatches input events.
pub struct DesktopController {
    pub wm: WindowManager,
    pub icons: IconRegistry,
    pub explorer: WorkExplorer,
    pub start_menu: StartMenu,
    pub toasts: ToastManager,
    pub sched: Scheduler,
    drag: Option<DragSession>,
    toast_duration_ms: u64,
    links: Box<dyn LinkService>,
    time: Box<dyn TimeService>,
}

impl DesktopController {
    /// Assemble the controller over an already-built scene: render icons,
    /// register windows, sync the explorer highlight, auto-open startup
    /// popups with their close timers, and arm the clock.
    pub fn new(
        scene: &mut SceneRegistry,
        config: &ShellConfig,
        links: Box<dyn LinkService>,
        time: Box<dyn TimeService>,
    ) -> Self {
        let icons = IconRegistry::new(config.icons.clone());
        icons.render(scene, "icons");

        let desktop = scene.get("desktop").map(|node| node.rect()).unwrap_or(
            Rect::new(0, 0, config.desktop_width, config.desktop_height),
        );
        let wm = WindowManager::from_scene(desktop, scene);

        let mut explorer = WorkExplorer::new();
        explorer.sync_from_scene(scene);

        let mut ctl = Self {
            wm,
            icons,
            explorer,
            start_menu: StartMenu::new(),
            toasts: ToastManager::new(),
            sched: Scheduler::new(),
            drag: None,
            toast_duration_ms: config.toast_duration_ms,
            links,
            time,
        };

        for id in &config.popup_windows {
            if ctl.wm.open(scene, id) {
                ctl.sched
                    .schedule_once(config.popup_close_ms, TaskAction::ClosePopup(id.clone()));
            } else {
                log::warn!("startup popup {id:?} names no window");
            }
        }

        clock::update(scene, &*ctl.time);
        ctl.sched
            .schedule_every(theme::CLOCK_TICK_MS, TaskAction::UpdateClock);

        ctl
    }

    /// Handle one input event to completion.
    pub fn handle_event(&mut self, scene: &mut SceneRegistry, event: &InputEvent) -> EventOutcome {
        match event {
            InputEvent::Quit => return EventOutcome::Quit,
            InputEvent::PointerDown { x, y } => self.pointer_down(scene, *x, *y),
            InputEvent::PointerMove { x, y } => self.pointer_move(scene, *x, *y),
            InputEvent::PointerUp { .. } => {
                // Drags end unconditionally, wherever the pointer is.
                self.drag = None;
            },
            InputEvent::KeyPress(Key::Escape) => self.wm.close_all_open(scene),
            InputEvent::KeyPress(Key::Tab) => {
                scene.focus_next();
            },
            InputEvent::KeyPress(Key::Enter) | InputEvent::KeyPress(Key::Space) => {
                self.activate_focused(scene);
            },
            InputEvent::Submit { form } => self.submit(scene, form),
        }
        EventOutcome::Continue
    }

    /// Advance injected time and run every scheduler action that came due.
    pub fn tick(&mut self, scene: &mut SceneRegistry, now_ms: u64) {
        for action in self.sched.advance_to(now_ms) {
            match action {
                TaskAction::ClosePopup(id) => self.wm.close(scene, &id),
                TaskAction::UpdateClock => clock::update(scene, &*self.time),
                TaskAction::FadeToast(name) => ToastManager::fade(scene, &name),
                TaskAction::RemoveToast(name) => ToastManager::remove(scene, &name),
            }
        }
    }

    /// Open a window by key, falling back to the icon registry: a matching
    /// descriptor with a URL opens externally; anything else reports "no
    /// app" with exactly one toast.
    pub fn activate(&mut self, scene: &mut SceneRegistry, key: &str) {
        if self.wm.open(scene, key) {
            return;
        }
        if let Some(icon) = self.icons.lookup(key)
            && let Some(url) = icon.url.clone()
        {
            match self.links.open(&url) {
                Ok(()) => log::info!("opened external link {url:?}"),
                Err(e) => {
                    log::warn!("unable to open {url:?}: {e}");
                    self.toast(scene, "Unable to open link");
                },
            }
            return;
        }
        log::warn!("no window with id {key:?} and no URL configured");
        let message = format!("No app for {key:?}. Add a window or set a url in the icon config");
        self.toast(scene, &message);
    }

    fn pointer_down(&mut self, scene: &mut SceneRegistry, x: i32, y: i32) {
        let target = resolve_target(scene, x, y);

        // Outside click: anything that is not the start button, the menu
        // panel, or one of its items closes an open menu. Dispatch still
        // proceeds for whatever was clicked.
        if self.start_menu.is_open()
            && !matches!(
                target,
                Target::StartButton | Target::StartMenuPanel | Target::StartMenuItem { .. }
            )
        {
            self.start_menu.close(scene);
        }

        match target {
            Target::Icon { target } | Target::MenubarLink { target } => {
                self.activate(scene, &target);
            },
            Target::StartMenuItem { target } => {
                self.start_menu.close(scene);
                self.activate(scene, &target);
            },
            Target::StartButton => {
                self.start_menu.toggle(scene);
            },
            Target::CloseButton { window } => self.wm.close(scene, &window),
            Target::MinimizeButton { window } => {
                self.wm.minimize(scene, &window);
            },
            Target::Titlebar { window } => self.begin_drag(scene, &window, x, y),
            Target::SidebarFolder { folder } => self.explorer.select(scene, &folder),
            // Body clicks do not raise; only the titlebar does.
            Target::WindowBody
            | Target::StartMenuPanel
            | Target::Desktop
            | Target::Other
            | Target::Miss => {},
        }
    }

    fn begin_drag(&mut self, scene: &mut SceneRegistry, window: &str, x: i32, y: i32) {
        let minimized = self
            .wm
            .state(window)
            .map(|s| s.minimized)
            .unwrap_or(true);
        if minimized {
            return;
        }
        self.wm.raise_to_front(scene, window);
        if let Ok(panel) = scene.get(window) {
            self.drag = Some(DragSession {
                window: window.to_string(),
                grab_dx: x - panel.x,
                grab_dy: y - panel.y,
            });
        }
    }

    fn pointer_move(&mut self, scene: &mut SceneRegistry, x: i32, y: i32) {
        let Some(drag) = self.drag.clone() else {
            return;
        };
        let Ok(panel) = scene.get(&drag.window) else {
            return;
        };
        let size = Size::new(panel.w, panel.h);
        let desired = Point::new(x - drag.grab_dx, y - drag.grab_dy);
        let clamped = self.wm.clamp_position(size, desired);
        self.wm.move_to(scene, &drag.window, clamped.x, clamped.y);
    }

    fn activate_focused(&mut self, scene: &mut SceneRegistry) {
        let Some(name) = scene.focused().map(str::to_string) else {
            return;
        };
        let Ok(node) = scene.get(&name) else {
            return;
        };
        let activatable = matches!(node.role, Role::Icon | Role::MenubarLink);
        let Some(key) = node.target.clone() else {
            return;
        };
        if activatable {
            self.activate(scene, &key);
        }
    }

    fn submit(&mut self, scene: &mut SceneRegistry, form: &str) {
        let Some(result) = forms::submit(scene, form) else {
            return;
        };
        self.toast(scene, &result.toast);
        if let Some(window) = result.close_window {
            self.wm.close(scene, &window);
        }
    }

    fn toast(&mut self, scene: &mut SceneRegistry, message: &str) {
        self.toasts
            .show_with_duration(scene, &mut self.sched, message, self.toast_duration_ms);
    }
}

/// Map the topmost hit node to a typed dispatch target.
fn resolve_target(scene: &SceneRegistry, x: i32, y: i32) -> Target {
    let Some(name) = scene.hit_test(x, y) else {
        return Target::Miss;
    };
    let Ok(node) = scene.get(name) else {
        return Target::Miss;
    };
    let key = node.target.clone();
    match (node.role, key) {
        (Role::Icon, Some(target)) => Target::Icon { target },
        (Role::MenubarLink, Some(target)) => Target::MenubarLink { target },
        (Role::StartMenuItem, Some(target)) => Target::StartMenuItem { target },
        (Role::CloseButton, Some(window)) => Target::CloseButton { window },
        (Role::MinimizeButton, Some(window)) => Target::MinimizeButton { window },
        (Role::Titlebar, Some(window)) => Target::Titlebar { window },
        (Role::SidebarItem, Some(folder)) => Target::SidebarFolder { folder },
        (Role::Window, _) => Target::WindowBody,
        (Role::StartButton, _) => Target::StartButton,
        (Role::StartMenu, _) => Target::StartMenuPanel,
        (Role::Desktop, _) => Target::Desktop,
        _ => Target::Other,
    }
}
