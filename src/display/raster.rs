use log::trace;

use crate::{console::Console, consts::*};

use super::{codec::SCREEN, viewport::span, Color};

impl Console {
    /// Plots a pixel in raw screen space if it lies inside the clip rectangle.
    pub(crate) fn plot(&mut self, x: i64, y: i64, col: Color) {
        if self.clip_get().contains(x, y) {
            SCREEN.write(&mut self.mem_bus, x as i32, y as i32, col);
        }
    }

    /// Fills the whole screen with the background color, ignoring camera and clip.
    pub fn cls(&mut self) {
        let bg = self.bg_get();
        let c = bg.index();
        let col_bg = (c << 6) | (c << 4) | (c << 2) | c;
        let pal_bg = if bg.bank() == 1 {0b1111_1111} else {0};

        self.mem_bus.slice_mut(COLOR_PLANE, COLOR_PLANE_LEN).fill(col_bg);
        self.mem_bus.slice_mut(PALETTE_PLANE, PALETTE_PLANE_LEN).fill(pal_bg);

        self.text_l_line = 0;
        self.text_r_line = 0;
    }

    /// Draws the border of a `w` by `h` rectangle.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, col: Color) {
        if w <= 0 || h <= 0 {return}
        let (x, y) = self.to_screen(x, y);
        let (w, h) = (w as i64, h as i64);
        let clip = self.clip_get();

        for c in span(x, w, &clip.xs()) {
            self.plot(c, y, col);
            self.plot(c, y + h - 1, col);
        }
        for r in span(y, h, &clip.ys()) {
            self.plot(x, r, col);
            self.plot(x + w - 1, r, col);
        }
    }

    /// Draws a filled `w` by `h` rectangle.
    pub fn rect_fill(&mut self, x: i32, y: i32, w: i32, h: i32, col: Color) {
        let (x, y) = self.to_screen(x, y);
        let clip = self.clip_get();
        let cols = span(x, w as i64, &clip.xs());

        for r in span(y, h as i64, &clip.ys()) {
            for c in cols.clone() {
                self.plot(c, r, col);
            }
        }
    }

    /// Draws a line from (x1, y1) towards (x2, y2), end point excluded.
    ///
    /// A line spanning more than one column gets exactly one pixel per column,
    /// so steep lines leave gaps. Vertical lines get one pixel per row.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: Color) {
        let (mut x1, mut y1) = self.to_screen(x1, y1);
        let (mut x2, mut y2) = self.to_screen(x2, y2);
        trace!("line ({}, {}) -> ({}, {})", x1, y1, x2, y2);

        if x2 < x1 {
            (x1, y1, x2, y2) = (x2, y2, x1, y1);
        }
        let clip = self.clip_get();
        let w = x2 - x1;
        if w > 0 {
            let dh = (y2 - y1) as f64 / w as f64;
            for x in span(x1, w, &clip.xs()) {
                self.plot(x, y1 + (dh * (x - x1) as f64) as i64, col);
            }
            return;
        }

        if y2 < y1 {
            (y1, y2) = (y2, y1);
        }
        for y in span(y1, y2 - y1, &clip.ys()) {
            self.plot(x1, y, col);
        }
    }
}
