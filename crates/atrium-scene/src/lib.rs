//! Named-node scene registry.
//!
//! The scene is the shell's stand-in for the document the original desktop
//! mutated: a flat registry of named nodes with position, size, two-level
//! z ordering, visibility, text, an accessibility label, and a semantic
//! role. Nodes may name a parent; hiding or moving a parent carries its
//! subtree without touching each child's own flags. Components address
//! nodes by well-known names and treat missing names as silent no-ops.

pub mod helpers;

#[cfg(test)]
pub(crate) mod test_utils;

use atrium_types::backend::SceneBackend;
use atrium_types::error::{AtriumError, Result};
use atrium_types::geometry::Rect;
use atrium_types::role::Role;

/// A single scene node.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    /// Stacking order; higher draws later and hit-tests first.
    pub z: i32,
    /// The node's own visibility flag. Effective visibility also requires
    /// every ancestor to be visible.
    pub visible: bool,
    /// 0.0 = fully faded. Faded nodes still occupy the scene until removed.
    pub opacity: f32,
    /// Display text (clock readout, labels, field values).
    pub text: Option<String>,
    /// Accessible name announced for the node.
    pub label: Option<String>,
    pub role: Role,
    /// Key the node activates (window id, folder key, form name).
    pub target: Option<String>,
    /// Whether keyboard focus traversal stops here.
    pub focusable: bool,
    /// Name of the containing node, if any.
    pub parent: Option<String>,
    /// Single-selection marker (gallery sidebar highlight).
    pub selected: bool,
}

impl SceneNode {
    fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            z: 0,
            visible: true,
            opacity: 1.0,
            text: None,
            label: None,
            role: Role::Static,
            target: None,
            focusable: false,
            parent: None,
            selected: false,
        }
    }

    /// The node's bounding rect.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Whether the point lies inside the node.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect().contains(x, y)
    }
}

/// Registry of named nodes in insertion order.
///
/// Insertion order doubles as document order: it breaks z ties for drawing
/// and hit testing, and defines keyboard focus traversal.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    nodes: Vec<(String, SceneNode)>,
    focused: Option<String>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node, or return the existing one under that name.
    pub fn create(&mut self, name: &str) -> &mut SceneNode {
        if let Some(idx) = self.index_of(name) {
            return &mut self.nodes[idx].1;
        }
        self.nodes.push((name.to_string(), SceneNode::new()));
        &mut self.nodes.last_mut().expect("just pushed").1
    }

    /// Whether a node exists under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Look up a node.
    pub fn get(&self, name: &str) -> Result<&SceneNode> {
        self.index_of(name)
            .map(|idx| &self.nodes[idx].1)
            .ok_or_else(|| AtriumError::Scene(format!("no node named {name:?}")))
    }

    /// Look up a node mutably.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut SceneNode> {
        match self.index_of(name) {
            Some(idx) => Ok(&mut self.nodes[idx].1),
            None => Err(AtriumError::Scene(format!("no node named {name:?}"))),
        }
    }

    /// Detach a node. Returns whether it existed. Clears focus if the
    /// focused node is removed. Children of a removed node survive but lose
    /// effective visibility checks against it.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(idx) = self.index_of(name) else {
            return false;
        };
        self.nodes.remove(idx);
        if self.focused.as_deref() == Some(name) {
            self.focused = None;
        }
        true
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `(name, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SceneNode)> {
        self.nodes.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// Names of nodes matching a predicate, in insertion order.
    pub fn names_where<F>(&self, pred: F) -> Vec<String>
    where
        F: Fn(&SceneNode) -> bool,
    {
        self.nodes
            .iter()
            .filter(|(_, node)| pred(node))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Whether the node and every ancestor are visible. Missing nodes and
    /// dangling parents count as not visible.
    pub fn is_effectively_visible(&self, name: &str) -> bool {
        let mut cur = name.to_string();
        let mut hops = 0;
        loop {
            let Ok(node) = self.get(&cur) else {
                return false;
            };
            if !node.visible {
                return false;
            }
            match node.parent {
                Some(ref parent) => {
                    cur = parent.clone();
                    hops += 1;
                    // Parent cycles are a builder bug; fail closed.
                    if hops > self.nodes.len() {
                        return false;
                    }
                },
                None => return true,
            }
        }
    }

    /// Names of the node's descendants (children, grandchildren, ...) in
    /// insertion order.
    pub fn descendants(&self, root: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        loop {
            let mut grew = false;
            for (name, node) in &self.nodes {
                if out.iter().any(|n| n == name) {
                    continue;
                }
                let Some(ref parent) = node.parent else {
                    continue;
                };
                if parent == root || out.iter().any(|n| n == parent) {
                    out.push(name.clone());
                    grew = true;
                }
            }
            if !grew {
                return out;
            }
        }
    }

    /// Translate a node and its subtree by a delta.
    pub fn move_subtree(&mut self, root: &str, dx: i32, dy: i32) {
        if !self.contains(root) {
            return;
        }
        let members = self.subtree_names(root);
        for (name, node) in &mut self.nodes {
            if members.iter().any(|n| n == name) {
                node.x += dx;
                node.y += dy;
            }
        }
    }

    /// Shift a node's subtree z by a delta (used to raise a window with its
    /// titlebar and buttons).
    pub fn offset_subtree_z(&mut self, root: &str, dz: i32) {
        if !self.contains(root) {
            return;
        }
        let members = self.subtree_names(root);
        for (name, node) in &mut self.nodes {
            if members.iter().any(|n| n == name) {
                node.z += dz;
            }
        }
    }

    /// Topmost effectively visible node containing the point: highest z
    /// wins, insertion order breaks ties (later nodes sit on top of earlier
    /// ones).
    pub fn hit_test(&self, x: i32, y: i32) -> Option<&str> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, (name, node))| {
                node.contains(x, y) && self.is_effectively_visible(name)
            })
            .max_by_key(|(idx, (_, node))| (node.z, *idx))
            .map(|(_, (name, _))| name.as_str())
    }

    // -- Keyboard focus ------------------------------------------------------

    /// Name of the currently focused node, if it is still focusable.
    pub fn focused(&self) -> Option<&str> {
        let name = self.focused.as_deref()?;
        let node = self.get(name).ok()?;
        (node.focusable && self.is_effectively_visible(name)).then_some(name)
    }

    /// Focus a node by name. No-op if it is missing, hidden or not
    /// focusable.
    pub fn set_focus(&mut self, name: &str) {
        let Ok(node) = self.get(name) else {
            return;
        };
        if node.focusable && self.is_effectively_visible(name) {
            self.focused = Some(name.to_string());
        }
    }

    /// Advance focus to the next visible focusable node in insertion order,
    /// wrapping at the end. With no current focus, focuses the first.
    pub fn focus_next(&mut self) -> Option<&str> {
        let order: Vec<String> = self
            .nodes
            .iter()
            .filter(|(name, node)| node.focusable && self.is_effectively_visible(name))
            .map(|(name, _)| name.clone())
            .collect();
        if order.is_empty() {
            self.focused = None;
            return None;
        }
        let next = match self
            .focused
            .as_deref()
            .and_then(|cur| order.iter().position(|n| n == cur))
        {
            Some(idx) => order[(idx + 1) % order.len()].clone(),
            None => order[0].clone(),
        };
        self.focused = Some(next);
        self.focused.as_deref()
    }

    // -- Draw pass -----------------------------------------------------------

    /// Draw effectively visible, non-faded nodes in z order (insertion
    /// order within a z level) through the backend.
    pub fn draw(&self, backend: &mut dyn SceneBackend) -> Result<()> {
        backend.clear()?;
        let mut order: Vec<usize> = (0..self.nodes.len())
            .filter(|&idx| {
                let (name, node) = &self.nodes[idx];
                node.opacity > 0.0 && self.is_effectively_visible(name)
            })
            .collect();
        order.sort_by_key(|&idx| (self.nodes[idx].1.z, idx));
        for idx in order {
            let node = &self.nodes[idx].1;
            if node.w > 0 && node.h > 0 {
                backend.fill_rect(node.x, node.y, node.w, node.h)?;
            }
            if let Some(ref text) = node.text {
                backend.draw_text(text, node.x, node.y)?;
            }
        }
        backend.present()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|(n, _)| n == name)
    }

    fn subtree_names(&self, root: &str) -> Vec<String> {
        let mut members = self.descendants(root);
        members.push(root.to_string());
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockBackend;
    use proptest::prelude::*;

    fn rect_node(scene: &mut SceneRegistry, name: &str, x: i32, y: i32, w: u32, h: u32, z: i32) {
        let node = scene.create(name);
        node.x = x;
        node.y = y;
        node.w = w;
        node.h = h;
        node.z = z;
    }

    #[test]
    fn create_then_get() {
        let mut scene = SceneRegistry::new();
        scene.create("desktop").w = 800;
        assert!(scene.contains("desktop"));
        assert_eq!(scene.get("desktop").unwrap().w, 800);
    }

    #[test]
    fn create_twice_returns_same_node() {
        let mut scene = SceneRegistry::new();
        scene.create("a").x = 7;
        scene.create("a").y = 9;
        assert_eq!(scene.len(), 1);
        let node = scene.get("a").unwrap();
        assert_eq!((node.x, node.y), (7, 9));
    }

    #[test]
    fn get_missing_is_error() {
        let scene = SceneRegistry::new();
        assert!(scene.get("ghost").is_err());
    }

    #[test]
    fn remove_detaches() {
        let mut scene = SceneRegistry::new();
        scene.create("t");
        assert!(scene.remove("t"));
        assert!(!scene.contains("t"));
        assert!(!scene.remove("t"));
    }

    #[test]
    fn hit_test_topmost_z_wins() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "back", 0, 0, 100, 100, 50);
        rect_node(&mut scene, "front", 0, 0, 100, 100, 100);
        assert_eq!(scene.hit_test(10, 10), Some("front"));
    }

    #[test]
    fn hit_test_insertion_order_breaks_ties() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "first", 0, 0, 100, 100, 50);
        rect_node(&mut scene, "second", 0, 0, 100, 100, 50);
        assert_eq!(scene.hit_test(10, 10), Some("second"));
    }

    #[test]
    fn hit_test_skips_hidden() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "back", 0, 0, 100, 100, 50);
        rect_node(&mut scene, "front", 0, 0, 100, 100, 100);
        scene.get_mut("front").unwrap().visible = false;
        assert_eq!(scene.hit_test(10, 10), Some("back"));
    }

    #[test]
    fn hit_test_respects_parent_visibility() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "panel", 0, 0, 100, 100, 100);
        rect_node(&mut scene, "button", 10, 10, 20, 20, 102);
        scene.get_mut("button").unwrap().parent = Some("panel".to_string());
        scene.get_mut("panel").unwrap().visible = false;
        assert_eq!(scene.hit_test(15, 15), None);
    }

    #[test]
    fn hit_test_miss_is_none() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "a", 0, 0, 10, 10, 1);
        assert_eq!(scene.hit_test(50, 50), None);
    }

    #[test]
    fn descendants_walks_grandchildren() {
        let mut scene = SceneRegistry::new();
        scene.create("win");
        scene.create("bar").parent = Some("win".to_string());
        scene.create("btn").parent = Some("bar".to_string());
        scene.create("other");
        let d = scene.descendants("win");
        assert!(d.contains(&"bar".to_string()));
        assert!(d.contains(&"btn".to_string()));
        assert!(!d.contains(&"other".to_string()));
    }

    #[test]
    fn move_subtree_shifts_children() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "win", 10, 10, 100, 80, 50);
        rect_node(&mut scene, "bar", 10, 10, 100, 20, 51);
        scene.get_mut("bar").unwrap().parent = Some("win".to_string());
        scene.move_subtree("win", 5, -3);
        let win = scene.get("win").unwrap();
        let bar = scene.get("bar").unwrap();
        assert_eq!((win.x, win.y), (15, 7));
        assert_eq!((bar.x, bar.y), (15, 7));
    }

    #[test]
    fn move_subtree_missing_root_is_noop() {
        let mut scene = SceneRegistry::new();
        scene.move_subtree("ghost", 5, 5);
        assert!(scene.is_empty());
    }

    #[test]
    fn offset_subtree_z_raises_children() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "win", 0, 0, 10, 10, 50);
        rect_node(&mut scene, "bar", 0, 0, 10, 2, 51);
        scene.get_mut("bar").unwrap().parent = Some("win".to_string());
        scene.offset_subtree_z("win", 50);
        assert_eq!(scene.get("win").unwrap().z, 100);
        assert_eq!(scene.get("bar").unwrap().z, 101);
    }

    #[test]
    fn effective_visibility_requires_ancestors() {
        let mut scene = SceneRegistry::new();
        scene.create("a");
        scene.create("b").parent = Some("a".to_string());
        assert!(scene.is_effectively_visible("b"));
        scene.get_mut("a").unwrap().visible = false;
        assert!(!scene.is_effectively_visible("a"));
        assert!(!scene.is_effectively_visible("b"));
    }

    #[test]
    fn effective_visibility_dangling_parent_fails_closed() {
        let mut scene = SceneRegistry::new();
        scene.create("orphan").parent = Some("ghost".to_string());
        assert!(!scene.is_effectively_visible("orphan"));
    }

    #[test]
    fn focus_traversal_in_insertion_order() {
        let mut scene = SceneRegistry::new();
        for name in ["i1", "i2", "i3"] {
            scene.create(name).focusable = true;
        }
        assert_eq!(scene.focus_next(), Some("i1"));
        assert_eq!(scene.focus_next(), Some("i2"));
        assert_eq!(scene.focus_next(), Some("i3"));
        assert_eq!(scene.focus_next(), Some("i1"));
    }

    #[test]
    fn focus_skips_hidden_and_non_focusable() {
        let mut scene = SceneRegistry::new();
        scene.create("deco");
        scene.create("a").focusable = true;
        let node = scene.create("b");
        node.focusable = true;
        node.visible = false;
        scene.create("c").focusable = true;
        assert_eq!(scene.focus_next(), Some("a"));
        assert_eq!(scene.focus_next(), Some("c"));
    }

    #[test]
    fn focused_clears_when_node_hidden() {
        let mut scene = SceneRegistry::new();
        scene.create("a").focusable = true;
        scene.set_focus("a");
        assert_eq!(scene.focused(), Some("a"));
        scene.get_mut("a").unwrap().visible = false;
        assert_eq!(scene.focused(), None);
    }

    #[test]
    fn set_focus_rejects_non_focusable() {
        let mut scene = SceneRegistry::new();
        scene.create("deco");
        scene.set_focus("deco");
        assert_eq!(scene.focused(), None);
    }

    #[test]
    fn remove_clears_focus() {
        let mut scene = SceneRegistry::new();
        scene.create("a").focusable = true;
        scene.set_focus("a");
        scene.remove("a");
        assert_eq!(scene.focused(), None);
    }

    #[test]
    fn draw_emits_rects_and_text_in_z_order() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "front", 20, 0, 10, 10, 100);
        rect_node(&mut scene, "back", 0, 0, 10, 10, 50);
        scene.get_mut("back").unwrap().text = Some("behind".to_string());
        let mut backend = MockBackend::new();
        scene.draw(&mut backend).unwrap();
        assert_eq!(backend.fill_rect_count(), 2);
        assert!(backend.has_text("behind"));
        // Back (z=50) must be filled before front (z=100).
        assert_eq!(
            backend.fill_order(),
            vec![(0, 0, 10, 10), (20, 0, 10, 10)]
        );
        assert!(backend.cleared);
        assert!(backend.presented);
    }

    #[test]
    fn draw_skips_hidden_and_faded() {
        let mut scene = SceneRegistry::new();
        rect_node(&mut scene, "hidden", 0, 0, 10, 10, 1);
        scene.get_mut("hidden").unwrap().visible = false;
        rect_node(&mut scene, "faded", 0, 0, 10, 10, 1);
        scene.get_mut("faded").unwrap().opacity = 0.0;
        let mut backend = MockBackend::new();
        scene.draw(&mut backend).unwrap();
        assert_eq!(backend.fill_rect_count(), 0);
    }

    #[test]
    fn names_where_filters_by_predicate() {
        let mut scene = SceneRegistry::new();
        scene.create("w1").role = Role::Window;
        scene.create("deco");
        scene.create("w2").role = Role::Window;
        let windows = scene.names_where(|n| n.role == Role::Window);
        assert_eq!(windows, vec!["w1".to_string(), "w2".to_string()]);
    }

    proptest! {
        #[test]
        fn hit_test_result_contains_point(
            x in -50i32..150,
            y in -50i32..150,
        ) {
            let mut scene = SceneRegistry::new();
            rect_node(&mut scene, "a", 0, 0, 100, 100, 50);
            rect_node(&mut scene, "b", 25, 25, 100, 100, 100);
            if let Some(name) = scene.hit_test(x, y) {
                let name = name.to_string();
                prop_assert!(scene.get(&name).unwrap().contains(x, y));
            } else {
                for (_, node) in scene.iter() {
                    prop_assert!(!node.contains(x, y));
                }
            }
        }

        #[test]
        fn hit_test_never_returns_lower_z_when_covered(
            x in 25i32..100,
            y in 25i32..100,
        ) {
            let mut scene = SceneRegistry::new();
            rect_node(&mut scene, "low", 0, 0, 200, 200, 50);
            rect_node(&mut scene, "high", 25, 25, 75, 75, 100);
            prop_assert_eq!(scene.hit_test(x, y), Some("high"));
        }
    }
}
