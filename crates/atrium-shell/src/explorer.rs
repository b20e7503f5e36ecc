//! Gallery explorer: folder-filtered content sets with a single-selection
//! sidebar.
//!
//! Selecting a folder hides every gallery set, unhides `gallery-<folder>`,
//! and moves the highlight to the matching sidebar entry. Startup calls
//! [`WorkExplorer::sync_from_scene`] once so whatever set the builder left
//! visible determines the initial highlight; the mapping is never
//! re-checked afterwards.

use atrium_scene::SceneRegistry;
use atrium_types::role::Role;

/// Prefix gallery set node names derive from folder keys.
pub const GALLERY_PREFIX: &str = "gallery-";

/// Selection state for the explorer.
#[derive(Debug, Default)]
pub struct WorkExplorer {
    selected: Option<String>,
}

impl WorkExplorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected folder key.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// One-time startup sync: the first visible gallery set decides the
    /// initial selection and sidebar highlight.
    pub fn sync_from_scene(&mut self, scene: &mut SceneRegistry) {
        let visible = scene.names_where(|n| n.role == Role::GallerySet && n.visible);
        let Some(first) = visible.first() else {
            return;
        };
        let folder = first
            .strip_prefix(GALLERY_PREFIX)
            .unwrap_or(first)
            .to_string();
        if let Some(item) = sidebar_item_for(scene, &folder)
            && let Ok(node) = scene.get_mut(&item)
        {
            node.selected = true;
        }
        self.selected = Some(folder);
    }

    /// Show only the set for `folder` and highlight its sidebar entry.
    pub fn select(&mut self, scene: &mut SceneRegistry, folder: &str) {
        for name in scene.names_where(|n| n.role == Role::GallerySet) {
            if let Ok(node) = scene.get_mut(&name) {
                node.visible = false;
            }
        }
        if let Ok(node) = scene.get_mut(&format!("{GALLERY_PREFIX}{folder}")) {
            node.visible = true;
        }
        for name in scene.names_where(|n| n.role == Role::SidebarItem) {
            if let Ok(node) = scene.get_mut(&name) {
                node.selected = false;
            }
        }
        if let Some(item) = sidebar_item_for(scene, folder)
            && let Ok(node) = scene.get_mut(&item)
        {
            node.selected = true;
        }
        self.selected = Some(folder.to_string());
    }
}

fn sidebar_item_for(scene: &SceneRegistry, folder: &str) -> Option<String> {
    scene
        .names_where(|n| n.role == Role::SidebarItem && n.target.as_deref() == Some(folder))
        .into_iter()
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;

    fn explorer_scene(default_visible: Option<&str>) -> SceneRegistry {
        let mut scene = SceneRegistry::new();
        layout::add_window(&mut scene, "work", "Work", 480, 320);
        for folder in ["prints", "motion", "identity"] {
            layout::add_sidebar_item(&mut scene, "work", folder, folder);
            layout::add_gallery_set(&mut scene, "work", folder, default_visible == Some(folder));
        }
        scene
    }

    fn visible_sets(scene: &SceneRegistry) -> Vec<String> {
        scene.names_where(|n| n.role == Role::GallerySet && n.visible)
    }

    fn selected_items(scene: &SceneRegistry) -> Vec<String> {
        scene.names_where(|n| n.role == Role::SidebarItem && n.selected)
    }

    #[test]
    fn select_shows_exactly_one_set_and_highlight() {
        let mut scene = explorer_scene(Some("prints"));
        let mut explorer = WorkExplorer::new();
        explorer.select(&mut scene, "motion");
        assert_eq!(visible_sets(&scene), vec!["gallery-motion".to_string()]);
        assert_eq!(selected_items(&scene), vec!["sidebar_motion".to_string()]);
        assert_eq!(explorer.selected(), Some("motion"));
    }

    #[test]
    fn reselect_moves_highlight() {
        let mut scene = explorer_scene(None);
        let mut explorer = WorkExplorer::new();
        explorer.select(&mut scene, "prints");
        explorer.select(&mut scene, "identity");
        assert_eq!(visible_sets(&scene), vec!["gallery-identity".to_string()]);
        assert_eq!(selected_items(&scene), vec!["sidebar_identity".to_string()]);
    }

    #[test]
    fn select_unknown_folder_hides_everything() {
        let mut scene = explorer_scene(Some("prints"));
        let mut explorer = WorkExplorer::new();
        explorer.select(&mut scene, "ghost");
        assert!(visible_sets(&scene).is_empty());
        assert!(selected_items(&scene).is_empty());
    }

    #[test]
    fn startup_sync_highlights_default_visible_set() {
        let mut scene = explorer_scene(Some("motion"));
        let mut explorer = WorkExplorer::new();
        explorer.sync_from_scene(&mut scene);
        assert_eq!(explorer.selected(), Some("motion"));
        assert_eq!(selected_items(&scene), vec!["sidebar_motion".to_string()]);
    }

    #[test]
    fn startup_sync_with_nothing_visible_selects_nothing() {
        let mut scene = explorer_scene(None);
        let mut explorer = WorkExplorer::new();
        explorer.sync_from_scene(&mut scene);
        assert_eq!(explorer.selected(), None);
        assert!(selected_items(&scene).is_empty());
    }
}
