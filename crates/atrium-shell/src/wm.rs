//! Window lifecycle and focus-order management.
//!
//! Each window is a scene panel with a titlebar and control buttons as
//! child nodes. The manager owns per-window state (open/minimized/placed)
//! and keeps the two-level z invariant: every window sits at the background
//! level except the single most recently raised one.
//!
//! Lifecycle per window: Closed -> Open -> Minimized -> Open -> Closed.
//! Minimized and Closed are both hidden; Open is the only visible state.

use atrium_scene::SceneRegistry;
use atrium_types::geometry::{Point, Rect, Size};
use atrium_types::role::Role;

use crate::theme;

/// Per-window state owned by the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub id: String,
    pub open: bool,
    pub minimized: bool,
    /// Whether the window has ever been explicitly positioned (centered on
    /// first open, or dragged). Unplaced windows center on open.
    pub placed: bool,
}

/// Manager over every window panel registered in the scene.
#[derive(Debug)]
pub struct WindowManager {
    desktop: Rect,
    windows: Vec<WindowState>,
}

impl WindowManager {
    /// Manager with no windows.
    pub fn new(desktop: Rect) -> Self {
        Self {
            desktop,
            windows: Vec::new(),
        }
    }

    /// Register every `Role::Window` node currently in the scene. A panel
    /// visible at startup counts as open.
    pub fn from_scene(desktop: Rect, scene: &SceneRegistry) -> Self {
        let mut wm = Self::new(desktop);
        for (name, node) in scene.iter() {
            if node.role == Role::Window {
                wm.windows.push(WindowState {
                    id: name.to_string(),
                    open: node.visible,
                    minimized: false,
                    placed: false,
                });
            }
        }
        wm
    }

    /// Desktop bounds windows are confined to.
    pub fn desktop(&self) -> Rect {
        self.desktop
    }

    /// State for a window id.
    pub fn state(&self, id: &str) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Whether the id names a managed window.
    pub fn contains(&self, id: &str) -> bool {
        self.state(id).is_some()
    }

    /// Whether the window is open (visible, not minimized).
    pub fn is_open(&self, id: &str) -> bool {
        self.state(id).is_some_and(|w| w.open)
    }

    /// Number of open windows.
    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|w| w.open).count()
    }

    /// Managed window ids in registration order.
    pub fn window_ids(&self) -> Vec<&str> {
        self.windows.iter().map(|w| w.id.as_str()).collect()
    }

    /// Open a window: show it, clear minimized, raise to front, and center
    /// it on first placement. Returns false when the id names no managed
    /// window (callers fall back to the icon registry).
    pub fn open(&mut self, scene: &mut SceneRegistry, id: &str) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if let Ok(node) = scene.get_mut(id) {
            node.visible = true;
        }
        self.windows[idx].open = true;
        self.windows[idx].minimized = false;
        self.raise_to_front(scene, id);
        if !self.windows[idx].placed {
            self.center(scene, id);
            self.windows[idx].placed = true;
        }
        true
    }

    /// Close a window: hide it and clear both open and minimized flags.
    /// Idempotent; unknown ids are a no-op.
    pub fn close(&mut self, scene: &mut SceneRegistry, id: &str) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if let Ok(node) = scene.get_mut(id) {
            node.visible = false;
        }
        self.windows[idx].open = false;
        self.windows[idx].minimized = false;
    }

    /// Toggle minimized. Returns the new minimized state, or `None` for
    /// unknown ids. Restoring also raises the window to the front.
    pub fn minimize(&mut self, scene: &mut SceneRegistry, id: &str) -> Option<bool> {
        let idx = self.index_of(id)?;
        let minimized = !self.windows[idx].minimized;
        self.windows[idx].minimized = minimized;
        if minimized {
            self.windows[idx].open = false;
            if let Ok(node) = scene.get_mut(id) {
                node.visible = false;
            }
        } else {
            self.windows[idx].open = true;
            if let Ok(node) = scene.get_mut(id) {
                node.visible = true;
            }
            self.raise_to_front(scene, id);
        }
        Some(minimized)
    }

    /// Put every window at the background z, then this one at the front z.
    /// O(window count) per call, which is fine at desktop scale.
    pub fn raise_to_front(&mut self, scene: &mut SceneRegistry, id: &str) {
        if !self.contains(id) {
            return;
        }
        let ids: Vec<String> = self.windows.iter().map(|w| w.id.clone()).collect();
        for win_id in &ids {
            let level = if win_id == id {
                theme::Z_WINDOW_FRONT
            } else {
                theme::Z_WINDOW_BACK
            };
            if let Ok(node) = scene.get(win_id) {
                let dz = level - node.z;
                if dz != 0 {
                    scene.offset_subtree_z(win_id, dz);
                }
            }
        }
    }

    /// The window currently at the front z, if any.
    pub fn front_window(&self, scene: &SceneRegistry) -> Option<String> {
        self.windows
            .iter()
            .find(|w| {
                scene
                    .get(&w.id)
                    .map(|node| node.z == theme::Z_WINDOW_FRONT)
                    .unwrap_or(false)
            })
            .map(|w| w.id.clone())
    }

    /// Close every open window (the Escape accelerator).
    pub fn close_all_open(&mut self, scene: &mut SceneRegistry) {
        let open: Vec<String> = self
            .windows
            .iter()
            .filter(|w| w.open)
            .map(|w| w.id.clone())
            .collect();
        for id in open {
            self.close(scene, &id);
        }
    }

    /// Move a window (and its subtree) to an absolute position and mark it
    /// explicitly placed.
    pub fn move_to(&mut self, scene: &mut SceneRegistry, id: &str, x: i32, y: i32) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let Ok(node) = scene.get(id) else {
            return;
        };
        let (dx, dy) = (x - node.x, y - node.y);
        scene.move_subtree(id, dx, dy);
        self.windows[idx].placed = true;
    }

    /// Clamp a desired window origin so the window stays fully inside the
    /// desktop, independently per axis.
    pub fn clamp_position(&self, size: Size, desired: Point) -> Point {
        Rect::clamp_origin(size, self.desktop, desired)
    }

    fn center(&mut self, scene: &mut SceneRegistry, id: &str) {
        let Ok(node) = scene.get(id) else {
            return;
        };
        let left = self.desktop.x + (self.desktop.w as i32 - node.w as i32) / 2;
        let top = self.desktop.y
            + ((self.desktop.h as i32 - node.h as i32) / 2).max(theme::WINDOW_TOP_MIN);
        let (dx, dy) = (left - node.x, top - node.y);
        scene.move_subtree(id, dx, dy);
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }
}
