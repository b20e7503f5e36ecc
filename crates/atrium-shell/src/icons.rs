//! Launcher icon registry.
//!
//! A fixed, ordered list of icon descriptors and the rendering that turns
//! it into focusable, labeled icon nodes inside the `icons` container.
//! Lookup resolves a key to the first descriptor matching by target or
//! name; duplicate keys are undefined behavior flagged with a warning at
//! construction, not silently repaired.

use serde::{Deserialize, Serialize};

use atrium_scene::SceneRegistry;
use atrium_types::role::Role;

use crate::theme;

/// One launcher entry: opens a window target, or an external URL when no
/// window matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Accessible name.
    pub name: String,
    /// Asset path for the icon image.
    pub image: String,
    /// Display label under the icon.
    pub label: String,
    /// Window key the icon activates.
    pub target: String,
    /// External fallback when no window carries the target key.
    #[serde(default)]
    pub url: Option<String>,
}

/// Ordered icon list with first-match lookup.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: Vec<IconDescriptor>,
}

impl IconRegistry {
    /// Build a registry, warning once per duplicated key.
    pub fn new(icons: Vec<IconDescriptor>) -> Self {
        for (idx, icon) in icons.iter().enumerate() {
            let clash = icons[..idx]
                .iter()
                .any(|earlier| earlier.target == icon.target || earlier.name == icon.name);
            if clash {
                log::warn!(
                    "duplicate icon key {:?}/{:?}; lookups resolve to the first match",
                    icon.target,
                    icon.name,
                );
            }
        }
        Self { icons }
    }

    /// The built-in portfolio set.
    pub fn default_set() -> Vec<IconDescriptor> {
        let entry = |name: &str, image: &str, label: &str, target: &str, url: Option<&str>| {
            IconDescriptor {
                name: name.to_string(),
                image: image.to_string(),
                label: label.to_string(),
                target: target.to_string(),
                url: url.map(str::to_string),
            }
        };
        vec![
            entry(
                "Studio",
                "assets/icon-studio.png",
                "Studio",
                "studio",
                None,
            ),
            entry(
                "Contact",
                "assets/icon-contact.png",
                "Contact",
                "contact",
                Some("mailto:hello@example.com"),
            ),
            entry("Press", "assets/icon-press.png", "Press", "press", None),
            entry(
                "Assisting",
                "assets/icon-assisting.png",
                "Assisting",
                "assisting",
                None,
            ),
            entry(
                "Graphic design",
                "assets/icon-design.png",
                "graphic design",
                "design",
                None,
            ),
            entry(
                "Instagram",
                "assets/icon-instagram.png",
                "Instagram",
                "instagram",
                Some("https://instagram.com/"),
            ),
            entry(
                "Journal",
                "assets/icon-journal.png",
                "Journal",
                "journal",
                Some("/journal/"),
            ),
            entry(
                "Showreel",
                "assets/icon-showreel.png",
                "Showreel",
                "showreel",
                None,
            ),
            entry(
                "Find Me",
                "assets/icon-find-me.png",
                "Find Me",
                "find-me",
                Some("/find-me/"),
            ),
        ]
    }

    /// Descriptors in render order.
    pub fn list(&self) -> &[IconDescriptor] {
        &self.icons
    }

    /// First descriptor whose target or name equals the key.
    pub fn lookup(&self, key: &str) -> Option<&IconDescriptor> {
        self.icons
            .iter()
            .find(|icon| icon.target == key || icon.name == key)
    }

    /// Emit one focusable icon node per descriptor into the named
    /// container, stacked in a column that wraps at the container's
    /// bottom edge. Silent no-op when the container is missing.
    pub fn render(&self, scene: &mut SceneRegistry, container: &str) {
        let Ok(bounds) = scene.get(container).map(|node| node.rect()) else {
            log::debug!("icon container {container:?} missing; skipping render");
            return;
        };
        let step = theme::ICON_H as i32 + theme::ICON_GAP;
        let per_column = ((bounds.h as i32 / step).max(1)) as usize;
        for (idx, icon) in self.icons.iter().enumerate() {
            let col = (idx / per_column) as i32;
            let row = (idx % per_column) as i32;
            let node = scene.create(&format!("icon_{idx}"));
            node.x = bounds.x + col * (theme::ICON_W as i32 + theme::ICON_GAP);
            node.y = bounds.y + row * step;
            node.w = theme::ICON_W;
            node.h = theme::ICON_H;
            node.z = theme::Z_ICONS;
            node.role = Role::Icon;
            node.text = Some(icon.label.clone());
            node.label = Some(icon.name.clone());
            node.target = Some(icon.target.clone());
            node.focusable = true;
            node.parent = Some(container.to_string());
        }
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new(Self::default_set())
    }
}
