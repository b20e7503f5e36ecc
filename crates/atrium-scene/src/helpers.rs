//! Small conveniences for building and updating scenes.

use crate::SceneRegistry;

/// Ensure a sized panel node exists with the given geometry and z.
pub fn ensure_panel(
    scene: &mut SceneRegistry,
    name: &str,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    z: i32,
) {
    let node = scene.create(name);
    node.x = x;
    node.y = y;
    node.w = w;
    node.h = h;
    node.z = z;
    node.visible = true;
}

/// Ensure a text node exists at the given position and set its content.
pub fn ensure_text(scene: &mut SceneRegistry, name: &str, x: i32, y: i32, text: &str) {
    let node = scene.create(name);
    node.x = x;
    node.y = y;
    node.text = Some(text.to_string());
    node.visible = true;
}

/// Set a node's text if it exists; silent no-op otherwise.
pub fn set_text(scene: &mut SceneRegistry, name: &str, text: &str) {
    if let Ok(node) = scene.get_mut(name) {
        node.text = Some(text.to_string());
    }
}

/// Hide every named node that exists.
pub fn hide_nodes(scene: &mut SceneRegistry, names: &[&str]) {
    for name in names {
        if let Ok(node) = scene.get_mut(name) {
            node.visible = false;
        }
    }
}
