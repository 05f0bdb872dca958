use crate::{console::Console, consts::SCREEN_WIDTH};

use super::{codec::INTERNAL_SPRITES, font::{self, GLYPH_H, GLYPH_W}, Color, COL3};

/// Additional options for drawing text
#[derive(Clone, Copy, Debug)]
pub struct TextOpts {
    pub col: Color,
    /// Fills the empty part of each glyph cell when set
    pub background: Option<Color>,
    /// Shift by the camera like other shapes instead of staying fixed to the screen
    pub relative: bool,
}

impl Default for TextOpts {
    fn default() -> Self {
        Self {col: COL3, background: None, relative: false}
    }
}

impl Console {
    /// Prints text at (x, y). A newline returns to `x` one line down.
    pub fn text(&mut self, text: &str, x: i32, y: i32, opts: &TextOpts) {
        let (x, y) = if opts.relative {self.to_screen(x, y)} else {(x as i64, y as i64)};
        for (line_no, line) in text.split('\n').enumerate() {
            self.text_line(line, x, y + line_no as i64 * GLYPH_H as i64, opts);
        }
    }

    /// Prints text at the top left of the screen.
    /// Each line moves the cursor down until the next `cls`.
    pub fn text_l(&mut self, text: &str, opts: &TextOpts) {
        let opts = TextOpts {relative: false, ..*opts};
        for line in text.split('\n') {
            let y = 1 + self.text_l_line as i64 * GLYPH_H as i64;
            self.text_l_line = self.text_l_line.saturating_add(1);
            self.text_line(line, 1, y, &opts);
        }
    }

    /// Prints text right aligned at the top right of the screen.
    /// Each line moves the cursor down until the next `cls`.
    pub fn text_r(&mut self, text: &str, opts: &TextOpts) {
        let opts = TextOpts {relative: false, ..*opts};
        for line in text.split('\n') {
            let width = line.chars().count() as i64 * GLYPH_W as i64;
            let y = 1 + self.text_r_line as i64 * GLYPH_H as i64;
            self.text_r_line = self.text_r_line.saturating_add(1);
            self.text_line(line, SCREEN_WIDTH as i64 - width, y, &opts);
        }
    }

    fn text_line(&mut self, line: &str, x: i64, y: i64, opts: &TextOpts) {
        let right = self.clip_get().xs().end;
        for (i, c) in line.chars().enumerate() {
            let gx = x + i as i64 * GLYPH_W as i64;
            if gx >= right {break}
            self.glyph(u8::try_from(c).unwrap_or(b'?'), gx, y, opts);
        }
    }

    fn glyph(&mut self, c: u8, x: i64, y: i64, opts: &TextOpts) {
        let (cx, cy) = font::cell(c);
        for gy in 0..GLYPH_H {
            for gx in 0..GLYPH_W {
                let set = INTERNAL_SPRITES.read(&self.mem_bus, cx + gx, cy + gy)
                    .is_some_and(|p| p.index() != 0);
                let (px, py) = (x + gx as i64, y + gy as i64);
                if set {
                    self.plot(px, py, opts.col);
                } else if let Some(bg) = opts.background {
                    self.plot(px, py, bg);
                }
            }
        }
    }
}
