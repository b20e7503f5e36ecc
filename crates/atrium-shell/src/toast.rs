//! Transient toast notifications.
//!
//! Each toast is an independent node; concurrent toasts simply stack with
//! no queue or de-duplication. A toast lives for its duration, fades, then
//! detaches -- both steps are scheduler tasks so tests drive them with
//! plain time.

use atrium_scene::SceneRegistry;
use atrium_types::role::Role;

use crate::sched::{Scheduler, TaskAction};
use crate::theme;

/// Spawns toast nodes with monotonically increasing names.
#[derive(Debug, Default)]
pub struct ToastManager {
    counter: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast for the default duration.
    pub fn show(&mut self, scene: &mut SceneRegistry, sched: &mut Scheduler, message: &str) -> String {
        self.show_with_duration(scene, sched, message, theme::TOAST_DURATION_MS)
    }

    /// Show a toast, schedule its fade at `duration_ms` and its removal
    /// after the fade span. Returns the toast node name.
    pub fn show_with_duration(
        &mut self,
        scene: &mut SceneRegistry,
        sched: &mut Scheduler,
        message: &str,
        duration_ms: u64,
    ) -> String {
        let name = format!("toast_{}", self.counter);
        self.counter += 1;

        let bounds = scene
            .get("desktop")
            .map(|node| node.rect())
            .unwrap_or(atrium_types::geometry::Rect::new(
                0,
                0,
                theme::DESKTOP_W,
                theme::DESKTOP_H,
            ));
        let w = (message.len() as u32) * 8 + 24;
        let node = scene.create(&name);
        node.x = bounds.x + (bounds.w as i32 - w as i32) / 2;
        node.y = bounds.y + bounds.h as i32 - 80;
        node.w = w;
        node.h = 24;
        node.z = theme::Z_TOAST;
        node.role = Role::Toast;
        node.text = Some(message.to_string());

        sched.schedule_once(duration_ms, TaskAction::FadeToast(name.clone()));
        sched.schedule_once(
            duration_ms + theme::TOAST_FADE_MS,
            TaskAction::RemoveToast(name.clone()),
        );
        name
    }

    /// Begin the fade: the node stays in the scene but stops drawing.
    pub fn fade(scene: &mut SceneRegistry, name: &str) {
        if let Ok(node) = scene.get_mut(name) {
            node.opacity = 0.0;
        }
    }

    /// Detach the toast node.
    pub fn remove(scene: &mut SceneRegistry, name: &str) {
        scene.remove(name);
    }

    /// Names of toasts currently in the scene.
    pub fn active(scene: &SceneRegistry) -> Vec<String> {
        scene.names_where(|n| n.role == Role::Toast)
    }
}
