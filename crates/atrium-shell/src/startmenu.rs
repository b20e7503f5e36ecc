//! Start menu state.
//!
//! A single boolean mirrored onto the `start_menu` node. The controller
//! applies the outside-click rule: any pointer-down that is not the start
//! button, the menu panel, or one of its items closes the menu. Items are
//! children of the panel, so hiding the panel hides them too.

use atrium_scene::SceneRegistry;

/// Well-known name of the start menu panel node.
pub const START_MENU_NODE: &str = "start_menu";

/// Open/closed state for the start menu.
#[derive(Debug, Default)]
pub struct StartMenu {
    open: bool,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the menu and mirror visibility onto the panel node. Returns
    /// the new open state.
    pub fn toggle(&mut self, scene: &mut SceneRegistry) -> bool {
        self.open = !self.open;
        self.sync(scene);
        self.open
    }

    /// Close the menu (outside click or successful navigation).
    pub fn close(&mut self, scene: &mut SceneRegistry) {
        self.open = false;
        self.sync(scene);
    }

    fn sync(&self, scene: &mut SceneRegistry) {
        if let Ok(node) = scene.get_mut(START_MENU_NODE) {
            node.visible = self.open;
        }
    }
}
