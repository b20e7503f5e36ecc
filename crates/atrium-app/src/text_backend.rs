//! Coarse character-grid rendering backend.
//!
//! Scales desktop coordinates down to a terminal-sized grid: panel fills
//! become box outlines, text runs land clipped at their scaled position.
//! Good enough to eyeball window stacking and the taskbar in a terminal.

use atrium_types::backend::SceneBackend;
use atrium_types::error::Result;

/// Horizontal pixels per character cell.
const CELL_W: u32 = 16;
/// Vertical pixels per character cell.
const CELL_H: u32 = 16;

/// Backend that renders frames into a character grid.
pub struct TextBackend {
    cols: usize,
    rows: usize,
    grid: Vec<char>,
}

impl TextBackend {
    pub fn new(width: u32, height: u32) -> Self {
        let cols = (width / CELL_W).max(1) as usize;
        let rows = (height / CELL_H).max(1) as usize;
        Self {
            cols,
            rows,
            grid: vec![' '; cols * rows],
        }
    }

    /// The last presented frame as one string with newlines.
    pub fn frame(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            let line: String = self.grid[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    fn put(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.cols && row < self.rows {
            self.grid[row * self.cols + col] = ch;
        }
    }
}

impl SceneBackend for TextBackend {
    fn clear(&mut self) -> Result<()> {
        self.grid.fill(' ');
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let c0 = x.div_euclid(CELL_W as i32);
        let r0 = y.div_euclid(CELL_H as i32);
        let c1 = (x + w as i32 - 1).div_euclid(CELL_W as i32);
        let r1 = (y + h as i32 - 1).div_euclid(CELL_H as i32);
        for row in r0..=r1 {
            for col in c0..=c1 {
                let edge = row == r0 || row == r1 || col == c0 || col == c1;
                self.put(col, row, if edge { '+' } else { '.' });
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        let col = x.div_euclid(CELL_W as i32);
        let row = y.div_euclid(CELL_H as i32);
        for (idx, ch) in text.chars().enumerate() {
            self.put(col + idx as i32, row, ch);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
