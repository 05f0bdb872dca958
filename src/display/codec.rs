use crate::{bus::mem_bus::MemBusConnection, console::Console, consts::*};

use super::Color;

const COLOR_MASKS: [u8; 4] = [
    0b1111_1100,
    0b1111_0011,
    0b1100_1111,
    0b0011_1111,
];

/// A two-plane image in the console's pixel encoding.
///
/// The color plane packs four 2 bit indices per byte with the leftmost pixel
/// in the lowest bits. The palette plane packs eight bank bits per byte the
/// same way. Rows are contiguous in both planes.
#[derive(Clone, Copy, Debug)]
pub struct PlanarImage {
    pub color: u16,
    pub palette: u16,
    pub width: usize,
    pub height: usize,
}

pub const SCREEN: PlanarImage = PlanarImage {
    color: COLOR_PLANE,
    palette: PALETTE_PLANE,
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
};

pub const INTERNAL_SPRITES: PlanarImage = PlanarImage::sheet(INTERNAL_SHEET, INTERNAL_SHEET_WIDTH, INTERNAL_SHEET_HEIGHT);
pub const USER_SPRITES: PlanarImage = PlanarImage::sheet(SPRITE_SHEET, SPRITE_SHEET_WIDTH, SPRITE_SHEET_HEIGHT);

impl PlanarImage {
    /// An image whose palette plane directly follows its color plane.
    pub const fn sheet(base: u16, width: usize, height: usize) -> Self {
        Self {color: base, palette: base + (width * height / 4) as u16, width, height}
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Byte address and bit shift of a pixel's index in the color plane.
    pub fn color_addr(&self, x: usize, y: usize) -> (u16, u8) {
        let i = x / 4 + y * (self.width / 4);
        (self.color + i as u16, ((x % 4) * 2) as u8)
    }

    /// Byte address and bit shift of a pixel's bank bit in the palette plane.
    pub fn palette_addr(&self, x: usize, y: usize) -> (u16, u8) {
        let j = x / 8 + y * (self.width / 8);
        (self.palette + j as u16, (x % 8) as u8)
    }

    /// Writes one pixel. Coordinates outside the image are ignored.
    pub fn write(&self, bus: &mut impl MemBusConnection, x: i32, y: i32, col: Color) {
        if !self.contains(x, y) {return}
        let (x, y) = (x as usize, y as usize);

        let (i, cshift) = self.color_addr(x, y);
        let pixel = bus.read_mem(i) & COLOR_MASKS[cshift as usize / 2];
        bus.write_mem(i, pixel | (col.index() << cshift));

        let (j, pshift) = self.palette_addr(x, y);
        let pal = bus.read_mem(j) & !(1 << pshift);
        bus.write_mem(j, pal | (col.bank() << pshift));
    }

    /// Reads one pixel, or `None` outside the image.
    pub fn read<B: MemBusConnection + ?Sized>(&self, bus: &B, x: i32, y: i32) -> Option<Color> {
        if !self.contains(x, y) {return None}
        let (x, y) = (x as usize, y as usize);

        let (i, cshift) = self.color_addr(x, y);
        let index = (bus.read_mem(i) >> cshift) & 0b11;

        let (j, pshift) = self.palette_addr(x, y);
        let bank = (bus.read_mem(j) >> pshift) & 1;

        Some(Color::from_bits(index | (bank << 2)))
    }
}

impl Console {
    /// Sets a pixel in raw screen space. Camera and clip do not apply.
    pub fn pset(&mut self, x: i32, y: i32, col: Color) {
        SCREEN.write(&mut self.mem_bus, x, y, col);
    }

    /// Gets a pixel in raw screen space.
    pub fn pget(&self, x: i32, y: i32) -> Option<Color> {
        SCREEN.read(&self.mem_bus, x, y)
    }
}

#[cfg(test)]
mod test;
