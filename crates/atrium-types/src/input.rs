//! Platform-agnostic input event types.
//!
//! Every host maps its native input to these enums. The shell core never
//! sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at absolute desktop coordinates.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved (only meaningful to an active drag).
    PointerMove { x: i32, y: i32 },
    /// Pointer released. Position is reported but drags end regardless.
    PointerUp { x: i32, y: i32 },
    /// A named key pressed.
    KeyPress(Key),
    /// A form node submitted (host-side analog of a submit event).
    Submit { form: String },
    /// Host requested shutdown.
    Quit,
}

/// Keys the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Closes every open window.
    Escape,
    /// Activates the focused node.
    Enter,
    /// Activates the focused node (icons behave like buttons).
    Space,
    /// Advances keyboard focus.
    Tab,
}
