pub mod codec;
pub mod palette;
pub mod viewport;
pub mod raster;
pub mod sprite;
pub mod text;
pub(crate) mod font;

/// A logical screen color: a 2 bit index into one of two palette banks.
///
/// Encoded in a byte as `bank << 2 | index`. Higher bits are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color(u8);

impl Color {
    pub const fn new(index: u8, bank: u8) -> Self {
        Self(((bank & 1) << 2) | (index & 0b11))
    }

    pub const fn from_bits(byte: u8) -> Self {
        Self(byte & 0b111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> u8 {
        self.0 & 0b11
    }

    pub const fn bank(self) -> u8 {
        self.0 >> 2
    }
}

pub const COL0: Color = Color::new(0, 0);
pub const COL1: Color = Color::new(1, 0);
pub const COL2: Color = Color::new(2, 0);
pub const COL3: Color = Color::new(3, 0);
pub const COL4: Color = Color::new(0, 1);
pub const COL5: Color = Color::new(1, 1);
pub const COL6: Color = Color::new(2, 1);
pub const COL7: Color = Color::new(3, 1);

/// One of the sixteen palettes a renderer can map a bank onto.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Pal(u8);

impl Pal {
    /// Keeps the low nibble only.
    pub const fn new(n: u8) -> Self {
        Self(n & 0x0F)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}
