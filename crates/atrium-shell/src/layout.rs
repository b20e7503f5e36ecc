//! Scene builders for the standard desktop surfaces.
//!
//! These create the well-known nodes the controller addresses: the desktop
//! and bars, window panels with titlebars and control buttons, menubar
//! links, the gallery explorer's sidebar and sets, and form nodes with
//! their fields. Hosts call these at startup; nothing here is consulted
//! again afterwards.

use atrium_scene::SceneRegistry;
use atrium_types::role::{FormKind, Role};

use crate::theme;

/// Default position for windows that have never been placed. The first
/// open centers them, so this only matters for hidden geometry.
const WINDOW_DEFAULT_X: i32 = 64;
const WINDOW_DEFAULT_Y: i32 = 64;

/// Build the fixed chrome: menubar, desktop surface, icon container,
/// taskbar with start button and clock.
pub fn build_desktop(scene: &mut SceneRegistry, width: u32, height: u32) {
    let node = scene.create("menubar");
    node.w = width;
    node.h = theme::MENUBAR_H;
    node.z = theme::Z_MENUBAR;

    let desktop_h = height - theme::MENUBAR_H - theme::TASKBAR_H;
    let node = scene.create("desktop");
    node.y = theme::MENUBAR_H as i32;
    node.w = width;
    node.h = desktop_h;
    node.z = theme::Z_DESKTOP;
    node.role = Role::Desktop;

    let node = scene.create("icons");
    node.x = 16;
    node.y = theme::MENUBAR_H as i32 + 12;
    node.w = theme::ICON_W * 2 + 24;
    node.h = desktop_h - 24;
    node.z = theme::Z_DESKTOP;
    node.parent = Some("desktop".to_string());

    let taskbar_y = (height - theme::TASKBAR_H) as i32;
    let node = scene.create("taskbar");
    node.y = taskbar_y;
    node.w = width;
    node.h = theme::TASKBAR_H;
    node.z = theme::Z_TASKBAR;

    let node = scene.create("start_button");
    node.x = 4;
    node.y = taskbar_y + 4;
    node.w = theme::START_BTN_W;
    node.h = theme::TASKBAR_H - 8;
    node.z = theme::Z_TASKBAR + 1;
    node.role = Role::StartButton;
    node.text = Some("Start".to_string());
    node.label = Some("Start".to_string());
    node.focusable = true;
    node.parent = Some("taskbar".to_string());

    let node = scene.create("clock");
    node.x = width as i32 - 64;
    node.y = taskbar_y + 8;
    node.w = 56;
    node.h = 16;
    node.z = theme::Z_TASKBAR + 1;
    node.role = Role::Clock;
    node.parent = Some("taskbar".to_string());
}

/// Build the start menu panel with its items, anchored above the taskbar.
/// Hidden until toggled.
pub fn add_start_menu(scene: &mut SceneRegistry, items: &[(&str, &str)]) {
    let taskbar_y = scene
        .get("taskbar")
        .map(|node| node.y)
        .unwrap_or(theme::DESKTOP_H as i32 - theme::TASKBAR_H as i32);
    let pad = 8;
    let menu_h = pad * 2 + items.len() as i32 * theme::START_ITEM_H as i32;
    let menu_y = taskbar_y - menu_h - 2;

    let node = scene.create("start_menu");
    node.x = 2;
    node.y = menu_y;
    node.w = theme::START_MENU_W;
    node.h = menu_h as u32;
    node.z = theme::Z_START_MENU;
    node.role = Role::StartMenu;
    node.visible = false;

    for (idx, (label, target)) in items.iter().enumerate() {
        let node = scene.create(&format!("start_item_{target}"));
        node.x = 2 + pad;
        node.y = menu_y + pad + idx as i32 * theme::START_ITEM_H as i32;
        node.w = theme::START_MENU_W - 2 * pad as u32;
        node.h = theme::START_ITEM_H;
        node.z = theme::Z_START_MENU + 1;
        node.role = Role::StartMenuItem;
        node.text = Some((*label).to_string());
        node.label = Some((*label).to_string());
        node.target = Some((*target).to_string());
        node.parent = Some("start_menu".to_string());
    }
}

/// Build a hidden window panel with titlebar and minimize/close buttons.
pub fn add_window(scene: &mut SceneRegistry, id: &str, title: &str, w: u32, h: u32) {
    let node = scene.create(id);
    node.x = WINDOW_DEFAULT_X;
    node.y = WINDOW_DEFAULT_Y;
    node.w = w;
    node.h = h;
    node.z = theme::Z_WINDOW_BACK;
    node.role = Role::Window;
    node.label = Some(title.to_string());
    node.visible = false;
    node.parent = Some("desktop".to_string());

    let bar_name = format!("titlebar_{id}");
    let node = scene.create(&bar_name);
    node.x = WINDOW_DEFAULT_X;
    node.y = WINDOW_DEFAULT_Y;
    node.w = w;
    node.h = theme::TITLEBAR_H;
    node.z = theme::Z_WINDOW_BACK + theme::Z_TITLEBAR_OFFSET;
    node.role = Role::Titlebar;
    node.text = Some(title.to_string());
    node.target = Some(id.to_string());
    node.parent = Some(id.to_string());

    let btn = theme::TITLEBAR_BTN as i32;
    let gap = theme::TITLEBAR_BTN_GAP;
    let btn_y = WINDOW_DEFAULT_Y + (theme::TITLEBAR_H as i32 - btn) / 2;

    let node = scene.create(&format!("btn_min_{id}"));
    node.x = WINDOW_DEFAULT_X + w as i32 - 2 * (btn + gap);
    node.y = btn_y;
    node.w = theme::TITLEBAR_BTN;
    node.h = theme::TITLEBAR_BTN;
    node.z = theme::Z_WINDOW_BACK + theme::Z_BUTTON_OFFSET;
    node.role = Role::MinimizeButton;
    node.label = Some(format!("Minimize {title}"));
    node.target = Some(id.to_string());
    node.parent = Some(bar_name.clone());

    let node = scene.create(&format!("btn_close_{id}"));
    node.x = WINDOW_DEFAULT_X + w as i32 - (btn + gap);
    node.y = btn_y;
    node.w = theme::TITLEBAR_BTN;
    node.h = theme::TITLEBAR_BTN;
    node.z = theme::Z_WINDOW_BACK + theme::Z_BUTTON_OFFSET;
    node.role = Role::CloseButton;
    node.label = Some(format!("Close {title}"));
    node.target = Some(id.to_string());
    node.parent = Some(bar_name);
}

/// Add a menubar link bound to a window target, placed after any existing
/// links.
pub fn add_menubar_link(scene: &mut SceneRegistry, label: &str, target: &str) {
    let idx = scene.names_where(|n| n.role == Role::MenubarLink).len() as i32;
    let node = scene.create(&format!("menubar_link_{target}"));
    node.x = 120 + idx * 90;
    node.y = 4;
    node.w = 80;
    node.h = theme::MENUBAR_H - 8;
    node.z = theme::Z_MENUBAR + 1;
    node.role = Role::MenubarLink;
    node.text = Some(label.to_string());
    node.label = Some(label.to_string());
    node.target = Some(target.to_string());
    node.focusable = true;
    node.parent = Some("menubar".to_string());
}

/// Add a sidebar folder entry inside the gallery explorer window.
pub fn add_sidebar_item(scene: &mut SceneRegistry, window_id: &str, folder: &str, label: &str) {
    let idx = scene.names_where(|n| n.role == Role::SidebarItem).len() as i32;
    let (px, py) = panel_origin(scene, window_id);
    let node = scene.create(&format!("sidebar_{folder}"));
    node.x = px + 8;
    node.y = py + theme::TITLEBAR_H as i32 + 8 + idx * 22;
    node.w = 96;
    node.h = 20;
    node.z = theme::Z_WINDOW_BACK + theme::Z_TITLEBAR_OFFSET;
    node.role = Role::SidebarItem;
    node.text = Some(label.to_string());
    node.label = Some(label.to_string());
    node.target = Some(folder.to_string());
    node.parent = Some(window_id.to_string());
}

/// Add a gallery set for a folder key inside the explorer window. The set
/// node is named `gallery-<folder>`.
pub fn add_gallery_set(scene: &mut SceneRegistry, window_id: &str, folder: &str, visible: bool) {
    let (px, py) = panel_origin(scene, window_id);
    let (pw, ph) = scene
        .get(window_id)
        .map(|node| (node.w, node.h))
        .unwrap_or((320, 240));
    let node = scene.create(&format!("gallery-{folder}"));
    node.x = px + 112;
    node.y = py + theme::TITLEBAR_H as i32 + 8;
    node.w = pw.saturating_sub(120);
    node.h = ph.saturating_sub(theme::TITLEBAR_H + 16);
    node.z = theme::Z_WINDOW_BACK + theme::Z_TITLEBAR_OFFSET;
    node.role = Role::GallerySet;
    node.visible = visible;
    node.parent = Some(window_id.to_string());
}

/// Add a form of the given kind inside a window, with one field node per
/// name. Returns the form node's name.
pub fn add_form(
    scene: &mut SceneRegistry,
    window_id: &str,
    kind: FormKind,
    fields: &[&str],
) -> String {
    let (px, py) = panel_origin(scene, window_id);
    let form_name = format!("{}_form", kind.name());
    let node = scene.create(&form_name);
    node.x = px + 12;
    node.y = py + theme::TITLEBAR_H as i32 + 8;
    node.w = 200;
    node.h = fields.len() as u32 * 28 + 16;
    node.z = theme::Z_WINDOW_BACK + theme::Z_TITLEBAR_OFFSET;
    node.role = Role::Form(kind);
    node.target = Some(window_id.to_string());
    node.parent = Some(window_id.to_string());

    for (idx, field) in fields.iter().enumerate() {
        let node = scene.create(&format!("{form_name}_{field}"));
        node.x = px + 16;
        node.y = py + theme::TITLEBAR_H as i32 + 12 + idx as i32 * 28;
        node.w = 180;
        node.h = 22;
        node.z = theme::Z_WINDOW_BACK + theme::Z_BUTTON_OFFSET;
        node.role = Role::FormField;
        node.label = Some((*field).to_string());
        node.focusable = true;
        node.parent = Some(form_name.clone());
    }
    form_name
}

fn panel_origin(scene: &SceneRegistry, window_id: &str) -> (i32, i32) {
    scene
        .get(window_id)
        .map(|node| (node.x, node.y))
        .unwrap_or((WINDOW_DEFAULT_X, WINDOW_DEFAULT_Y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_desktop_creates_chrome() {
        let mut scene = SceneRegistry::new();
        build_desktop(&mut scene, 1024, 640);
        for name in ["menubar", "desktop", "icons", "taskbar", "start_button", "clock"] {
            assert!(scene.contains(name), "missing {name}");
        }
        let desktop = scene.get("desktop").unwrap();
        assert_eq!(desktop.h, 640 - theme::MENUBAR_H - theme::TASKBAR_H);
        assert_eq!(desktop.role, Role::Desktop);
    }

    #[test]
    fn add_window_creates_titlebar_and_buttons() {
        let mut scene = SceneRegistry::new();
        add_window(&mut scene, "press", "Press", 300, 200);
        assert_eq!(scene.get("press").unwrap().role, Role::Window);
        assert!(!scene.get("press").unwrap().visible);
        let bar = scene.get("titlebar_press").unwrap();
        assert_eq!(bar.role, Role::Titlebar);
        assert_eq!(bar.target.as_deref(), Some("press"));
        let close = scene.get("btn_close_press").unwrap();
        assert_eq!(close.role, Role::CloseButton);
        assert!(close.x > scene.get("btn_min_press").unwrap().x);
    }

    #[test]
    fn buttons_sit_above_titlebar() {
        let mut scene = SceneRegistry::new();
        add_window(&mut scene, "w", "W", 300, 200);
        assert!(scene.get("btn_close_w").unwrap().z > scene.get("titlebar_w").unwrap().z);
        assert!(scene.get("titlebar_w").unwrap().z > scene.get("w").unwrap().z);
    }

    #[test]
    fn start_menu_items_are_children() {
        let mut scene = SceneRegistry::new();
        build_desktop(&mut scene, 1024, 640);
        add_start_menu(&mut scene, &[("Press", "press"), ("Work", "work")]);
        assert!(!scene.get("start_menu").unwrap().visible);
        let item = scene.get("start_item_press").unwrap();
        assert_eq!(item.parent.as_deref(), Some("start_menu"));
        assert_eq!(item.target.as_deref(), Some("press"));
        // Hidden menu hides its items.
        assert!(!scene.is_effectively_visible("start_item_press"));
    }

    #[test]
    fn menubar_links_stack_horizontally() {
        let mut scene = SceneRegistry::new();
        build_desktop(&mut scene, 1024, 640);
        add_menubar_link(&mut scene, "Work", "work");
        add_menubar_link(&mut scene, "Press", "press");
        let a = scene.get("menubar_link_work").unwrap().x;
        let b = scene.get("menubar_link_press").unwrap().x;
        assert!(b > a);
    }

    #[test]
    fn gallery_set_name_derives_from_folder() {
        let mut scene = SceneRegistry::new();
        add_window(&mut scene, "work", "Work", 480, 320);
        add_gallery_set(&mut scene, "work", "prints", true);
        let set = scene.get("gallery-prints").unwrap();
        assert_eq!(set.role, Role::GallerySet);
        assert!(set.visible);
        assert_eq!(set.parent.as_deref(), Some("work"));
    }

    #[test]
    fn add_form_creates_field_nodes() {
        let mut scene = SceneRegistry::new();
        add_window(&mut scene, "profile", "Profile", 320, 260);
        let form = add_form(
            &mut scene,
            "profile",
            FormKind::Signup,
            &["name", "email", "password", "confirm"],
        );
        assert_eq!(form, "signup_form");
        assert_eq!(
            scene.get("signup_form").unwrap().role,
            Role::Form(FormKind::Signup)
        );
        assert_eq!(
            scene.get("signup_form").unwrap().target.as_deref(),
            Some("profile")
        );
        let field = scene.get("signup_form_email").unwrap();
        assert_eq!(field.role, Role::FormField);
        assert_eq!(field.parent.as_deref(), Some("signup_form"));
    }
}
