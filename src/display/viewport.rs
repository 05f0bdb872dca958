use std::ops::Range;

use crate::{bus::mem_bus::MemBusConnection, console::Console, consts::*};

/// The clip rectangle in raw screen space. Drawing outside it is discarded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Clip {
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

impl Clip {
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.xs().contains(&x) && self.ys().contains(&y)
    }

    /// Columns that can be drawn to: the clip rectangle cut to the screen.
    pub fn xs(&self) -> Range<i64> {
        self.x as i64..(self.x as i64 + self.w as i64).min(SCREEN_WIDTH as i64)
    }

    /// Rows that can be drawn to: the clip rectangle cut to the screen.
    pub fn ys(&self) -> Range<i64> {
        self.y as i64..(self.y as i64 + self.h as i64).min(SCREEN_HEIGHT as i64)
    }
}

/// The part of `start..start + len` that falls inside `within`. Empty when they miss.
pub(crate) fn span(start: i64, len: i64, within: &Range<i64>) -> Range<i64> {
    start.max(within.start)..start.saturating_add(len).min(within.end)
}

impl Console {
    /// Moves the camera. Every draw call except `pset` and `cls` is shifted by it.
    ///
    /// Values are truncated to 16 bits.
    pub fn camera(&mut self, x: i32, y: i32) {
        self.mem_bus.write_mem_16(CAMERA_X, x as u16);
        self.mem_bus.write_mem_16(CAMERA_Y, y as u16);
    }

    pub fn camera_get(&self) -> (u16, u16) {
        (self.mem_bus.read_mem_16(CAMERA_X), self.mem_bus.read_mem_16(CAMERA_Y))
    }

    /// Converts camera space to raw screen space. Widened so no input can overflow.
    pub(crate) fn to_screen(&self, x: i32, y: i32) -> (i64, i64) {
        let (cx, cy) = self.camera_get();
        (x as i64 - cx as i64, y as i64 - cy as i64)
    }

    /// Restricts drawing to a rectangle. Each value is truncated to a byte.
    pub fn clip(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.mem_bus.write_mem(CLIP_X, x as u8);
        self.mem_bus.write_mem(CLIP_Y, y as u8);
        self.mem_bus.write_mem(CLIP_W, w as u8);
        self.mem_bus.write_mem(CLIP_H, h as u8);
    }

    /// Resets the clip rectangle to the whole screen.
    pub fn rclip(&mut self) {
        self.clip(0, 0, SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
    }

    pub fn clip_get(&self) -> Clip {
        Clip {
            x: self.mem_bus.read_mem(CLIP_X),
            y: self.mem_bus.read_mem(CLIP_Y),
            w: self.mem_bus.read_mem(CLIP_W),
            h: self.mem_bus.read_mem(CLIP_H),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::assert_eq_hex;

    use super::*;

    #[test]
    fn test_camera_is_big_endian_and_truncated() {
        let mut console = Console::new();
        console.camera(0x1234, 0x1_ABCD);
        assert_eq_hex!(console.mem().read_mem(CAMERA_X), 0x12);
        assert_eq_hex!(console.mem().read_mem(CAMERA_X + 1), 0x34);
        assert_eq!(console.camera_get(), (0x1234, 0xABCD));

        console.camera(-1, 0);
        assert_eq!(console.camera_get(), (0xFFFF, 0));
    }

    #[test]
    fn test_clip_defaults_to_full_screen() {
        let console = Console::new();
        assert_eq!(console.clip_get(), Clip {x: 0, y: 0, w: 192, h: 192});
    }

    #[test]
    fn test_clip_truncates_each_field() {
        let mut console = Console::new();
        console.clip(0x101, 2, 300, 4);
        assert_eq!(console.clip_get(), Clip {x: 1, y: 2, w: 44, h: 4});

        console.rclip();
        assert_eq!(console.clip_get(), Clip {x: 0, y: 0, w: 192, h: 192});
    }

    #[test]
    fn test_clip_is_half_open() {
        let clip = Clip {x: 10, y: 10, w: 5, h: 5};
        assert!(clip.contains(10, 10));
        assert!(clip.contains(14, 14));
        assert!(!clip.contains(15, 14));
        assert!(!clip.contains(9, 12));
        assert!(!Clip {x: 0, y: 0, w: 0, h: 192}.contains(0, 0));
    }

    #[test]
    fn test_clip_spans_stop_at_screen_edge() {
        let clip = Clip {x: 180, y: 250, w: 200, h: 10};
        assert_eq!(clip.xs(), 180..192);
        assert!(clip.ys().is_empty());
        assert!(!clip.contains(200, 0));
    }

    #[test]
    fn test_span_intersects() {
        assert_eq!(span(-5, 10, &(0..192)), 0..5);
        assert!(span(i64::MAX - 1, 10, &(0..192)).is_empty());
        assert_eq!(span(i32::MIN as i64, i32::MAX as i64 * 2 + 1, &(0..192)), 0..192);
    }

    #[test]
    fn test_to_screen_survives_extremes() {
        let mut console = Console::new();
        console.camera(100, 0xFFFF);
        assert_eq!(console.to_screen(i32::MIN, i32::MAX), (i32::MIN as i64 - 100, i32::MAX as i64 - 0xFFFF));
    }
}
