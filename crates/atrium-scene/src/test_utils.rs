//! Shared test utilities for scene tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.

use atrium_types::backend::SceneBackend;
use atrium_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    FillRect { x: i32, y: i32, w: u32, h: u32 },
    DrawText { text: String, x: i32, y: i32 },
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub cleared: bool,
    pub presented: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            cleared: false,
            presented: false,
        }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Rect fills in the order they were issued.
    pub fn fill_order(&self) -> Vec<(i32, i32, u32, u32)> {
        self.calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::FillRect { x, y, w, h } = c {
                    Some((*x, *y, *w, *h))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }
}

impl SceneBackend for MockBackend {
    fn clear(&mut self) -> Result<()> {
        self.cleared = true;
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presented = true;
        Ok(())
    }
}
