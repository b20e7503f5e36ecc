//! Layout and stacking constants shared by the shell components.

/// Default desktop width.
pub const DESKTOP_W: u32 = 1024;
/// Default desktop height.
pub const DESKTOP_H: u32 = 640;

/// Menubar height (top edge).
pub const MENUBAR_H: u32 = 28;
/// Taskbar height (bottom edge).
pub const TASKBAR_H: u32 = 32;
/// Window titlebar height.
pub const TITLEBAR_H: u32 = 24;
/// Titlebar button edge length.
pub const TITLEBAR_BTN: u32 = 16;
/// Gap between titlebar buttons.
pub const TITLEBAR_BTN_GAP: i32 = 4;

/// Minimum distance a window's top edge keeps from the desktop top when
/// centered.
pub const WINDOW_TOP_MIN: i32 = 20;

/// Icon cell width.
pub const ICON_W: u32 = 72;
/// Icon cell height.
pub const ICON_H: u32 = 64;
/// Vertical gap between icon cells.
pub const ICON_GAP: i32 = 12;

/// Start button width on the taskbar.
pub const START_BTN_W: u32 = 64;
/// Start menu panel width.
pub const START_MENU_W: u32 = 180;
/// Start menu item row height.
pub const START_ITEM_H: u32 = 24;

// -- Stacking levels ----------------------------------------------------------

/// Desktop surface.
pub const Z_DESKTOP: i32 = 0;
/// Launcher icons.
pub const Z_ICONS: i32 = 10;
/// Background windows.
pub const Z_WINDOW_BACK: i32 = 50;
/// The single front window.
pub const Z_WINDOW_FRONT: i32 = 100;
/// Titlebar sits just above its window panel.
pub const Z_TITLEBAR_OFFSET: i32 = 1;
/// Titlebar buttons sit above the titlebar.
pub const Z_BUTTON_OFFSET: i32 = 2;
/// Menubar overlay.
pub const Z_MENUBAR: i32 = 800;
/// Taskbar overlay.
pub const Z_TASKBAR: i32 = 900;
/// Start menu popup (above bars).
pub const Z_START_MENU: i32 = 950;
/// Transient toasts (above everything).
pub const Z_TOAST: i32 = 9999;

// -- Timing -------------------------------------------------------------------

/// Default toast lifetime.
pub const TOAST_DURATION_MS: u64 = 3000;
/// Toast fade-out span before detach.
pub const TOAST_FADE_MS: u64 = 200;
/// Startup popup auto-close delay.
pub const POPUP_CLOSE_MS: u64 = 5000;
/// Clock refresh period.
pub const CLOCK_TICK_MS: u64 = 1000;
