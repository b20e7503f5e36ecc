//! Demo desktop content and a scripted session.
//!
//! Stands in for a host document: builds the window set the default icons
//! and start menu point at, then replays a short input script through the
//! controller so a plain `cargo run` exercises the whole surface.

use atrium_scene::SceneRegistry;
use atrium_shell::ShellConfig;
use atrium_shell::layout;
use atrium_types::input::{InputEvent, Key};
use atrium_types::role::FormKind;

/// Demo configuration: default icons plus the startup popups.
pub fn demo_config() -> ShellConfig {
    ShellConfig {
        popup_windows: vec![
            "popup-welcome".to_string(),
            "popup-news".to_string(),
            "popup-hire".to_string(),
            "popup-secret".to_string(),
        ],
        ..ShellConfig::default()
    }
}

/// Build the chrome, windows, explorer content and forms for the demo.
pub fn populate_demo_scene(scene: &mut SceneRegistry, config: &ShellConfig) {
    layout::build_desktop(scene, config.desktop_width, config.desktop_height);
    layout::add_start_menu(
        scene,
        &[
            ("Studio", "studio"),
            ("Work", "work"),
            ("Press", "press"),
            ("Connect", "connect"),
        ],
    );
    layout::add_menubar_link(scene, "Work", "work");
    layout::add_menubar_link(scene, "Press", "press");
    layout::add_menubar_link(scene, "Profile", "profile");

    layout::add_window(scene, "studio", "Studio", 420, 300);
    layout::add_window(scene, "press", "Press", 360, 240);
    layout::add_window(scene, "assisting", "Assisting", 360, 240);
    layout::add_window(scene, "design", "Graphic design", 360, 240);
    layout::add_window(scene, "showreel", "Showreel", 420, 280);
    layout::add_window(scene, "work", "Work", 520, 360);
    layout::add_window(scene, "profile", "Profile", 320, 280);
    layout::add_window(scene, "contact", "Contact", 320, 280);
    layout::add_window(scene, "connect", "Connect", 320, 280);
    for id in &config.popup_windows {
        layout::add_window(scene, id, id, 260, 140);
    }

    for (folder, label) in [
        ("prints", "Prints"),
        ("motion", "Motion"),
        ("identity", "Identity"),
    ] {
        layout::add_sidebar_item(scene, "work", folder, label);
        layout::add_gallery_set(scene, "work", folder, folder == "prints");
    }

    layout::add_form(
        scene,
        "profile",
        FormKind::Signup,
        &["name", "email", "password", "confirm"],
    );
    layout::add_form(
        scene,
        "contact",
        FormKind::Contact,
        &["name", "email", "message"],
    );
    layout::add_form(scene, "connect", FormKind::Message, &["to", "subject", "body"]);
}

/// A short scripted session: drag the frontmost startup popup, open a
/// window from its icon and another from the start menu, outlive the
/// popup timers, then clear the desk. Coordinates come from the scene
/// after bootstrap, so every scripted click targets a node that is not
/// going to move before the click lands (windows center themselves the
/// first time they open).
pub fn demo_script(scene: &SceneRegistry, config: &ShellConfig) -> Vec<(u64, InputEvent)> {
    let mut steps = Vec::new();
    let push_click = |at: u64, name: &str, steps: &mut Vec<(u64, InputEvent)>| {
        if let Some((x, y)) = center(scene, name) {
            steps.push((at, InputEvent::PointerDown { x, y }));
            steps.push((at + 80, InputEvent::PointerUp { x, y }));
        }
    };

    // Drag the frontmost popup (the last one opened) by its titlebar.
    if let Some(front) = config.popup_windows.last()
        && let Some((bx, by)) = center(scene, &format!("titlebar_{front}"))
    {
        steps.push((600, InputEvent::PointerDown { x: bx, y: by }));
        steps.push((700, InputEvent::PointerMove { x: bx + 120, y: by + 45 }));
        steps.push((800, InputEvent::PointerMove { x: bx + 240, y: by + 90 }));
        steps.push((900, InputEvent::PointerUp { x: bx + 240, y: by + 90 }));
    }

    // Launch Press from its icon.
    if let Some(idx) = icon_index(scene, "press") {
        push_click(1200, &format!("icon_{idx}"), &mut steps);
    }

    // Open the gallery explorer from the start menu.
    push_click(2500, "start_button", &mut steps);
    push_click(2700, "start_item_work", &mut steps);

    // Let the startup popups time out, then clear the desk.
    steps.push((6000, InputEvent::KeyPress(Key::Escape)));
    steps.push((6200, InputEvent::Quit));
    steps
}

fn icon_index(scene: &SceneRegistry, target: &str) -> Option<usize> {
    let mut idx = 0;
    loop {
        let name = format!("icon_{idx}");
        let node = scene.get(&name).ok()?;
        if node.target.as_deref() == Some(target) {
            return Some(idx);
        }
        idx += 1;
    }
}

fn center(scene: &SceneRegistry, name: &str) -> Option<(i32, i32)> {
    let node = scene.get(name).ok()?;
    Some((node.x + node.w as i32 / 2, node.y + node.h as i32 / 2))
}
