//! Rendering backend trait.
//!
//! The scene draws itself through this trait; hosts decide what a frame
//! looks like (the demo binary renders coarse text frames). Visual styling
//! is out of scope for the shell, so draw calls carry geometry and text
//! only.

use crate::error::Result;

/// Abstraction over frame rendering.
pub trait SceneBackend {
    /// Begin a frame.
    fn clear(&mut self) -> Result<()>;

    /// Fill a rectangle at desktop coordinates.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Draw a text run at desktop coordinates.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<()>;

    /// Present the frame.
    fn present(&mut self) -> Result<()>;
}
