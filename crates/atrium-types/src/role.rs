//! Semantic roles for scene nodes.
//!
//! The original controller dispatched by walking CSS classes up from the
//! event target. Here every interactive node declares its role up front and
//! the controller dispatches on it directly.

/// What a scene node *is* to the desktop controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Inert decoration; never a dispatch target of its own.
    #[default]
    Static,
    /// The desktop surface itself.
    Desktop,
    /// A launcher icon bound to a window target or URL.
    Icon,
    /// A window panel.
    Window,
    /// A window's titlebar drag region.
    Titlebar,
    /// The titlebar close button.
    CloseButton,
    /// The titlebar minimize button.
    MinimizeButton,
    /// The taskbar start button.
    StartButton,
    /// The start menu panel.
    StartMenu,
    /// A navigable start menu entry.
    StartMenuItem,
    /// A menubar link bound to a window target.
    MenubarLink,
    /// A gallery explorer sidebar entry bound to a folder key.
    SidebarItem,
    /// A gallery content group shown/hidden as a unit.
    GallerySet,
    /// The taskbar clock text.
    Clock,
    /// A transient notification.
    Toast,
    /// A placeholder form of the given kind.
    Form(FormKind),
    /// An input field belonging to a form.
    FormField,
}

/// The three placeholder form kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Signup,
    Contact,
    Message,
}

impl FormKind {
    /// Stable name used in logs and node naming.
    pub fn name(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Contact => "contact",
            Self::Message => "message",
        }
    }
}
