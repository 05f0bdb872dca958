use crate::bus::mem_bus::MemBus;

use super::{codec::INTERNAL_SPRITES, COL1};

pub const GLYPH_W: i32 = 4;
pub const GLYPH_H: i32 = 6;
pub const FIRST_CHAR: u8 = 0x20;
pub const LAST_CHAR: u8 = 0x7F;

const CELLS_PER_ROW: usize = 16;

// 3x5 glyphs for 0x20..=0x7F, one bit per pixel, row-major from the top left
// starting at bit 14.
const GLYPHS: [u16; 96] = [
    0x0000, 0x2482, 0x5A00, 0x5F7D, 0x3C9E, 0x52A5, 0x2AAB, 0x2400,
    0x1491, 0x4494, 0x0AA8, 0x05D0, 0x0014, 0x01C0, 0x0002, 0x12A4,
    0x7B6F, 0x2C97, 0x73E7, 0x72CF, 0x5BC9, 0x79CF, 0x79EF, 0x7252,
    0x7BEF, 0x7BCF, 0x0410, 0x0414, 0x1511, 0x0E38, 0x4454, 0x72C2,
    0x2BE3, 0x2BED, 0x6BAE, 0x3923, 0x6B6E, 0x79A7, 0x79A4, 0x396B,
    0x5BED, 0x7497, 0x126A, 0x5BAD, 0x4927, 0x5FED, 0x6B6D, 0x2B6A,
    0x6BA4, 0x2B73, 0x6BAD, 0x388E, 0x7492, 0x5B6B, 0x5B6A, 0x5BFD,
    0x5AAD, 0x5A92, 0x72A7, 0x3493, 0x4889, 0x6496, 0x2A00, 0x0007,
    0x4400, 0x076B, 0x4D6E, 0x0723, 0x176B, 0x05E3, 0x15D2, 0x075E,
    0x4D6D, 0x2092, 0x106A, 0x4BB5, 0x2491, 0x0FED, 0x0D6D, 0x056A,
    0x0D74, 0x0759, 0x0724, 0x078E, 0x2E91, 0x0B6B, 0x0B6A, 0x0B7F,
    0x0A95, 0x0B5E, 0x0EE7, 0x1591, 0x2492, 0x44D4, 0x03E0, 0x7FFF,
];

/// Top left corner of a character's 8x8 cell in the built-in sheet.
pub fn cell(c: u8) -> (i32, i32) {
    let c = if (FIRST_CHAR..=LAST_CHAR).contains(&c) {c} else {b'?'};
    let idx = (c - FIRST_CHAR) as usize;
    ((idx % CELLS_PER_ROW * 8) as i32, (idx / CELLS_PER_ROW * 8) as i32)
}

/// Renders the font into the built-in sprite region.
pub fn load_internal_sheet(mem_bus: &mut MemBus) {
    for (i, glyph) in GLYPHS.iter().enumerate() {
        let (cx, cy) = cell(FIRST_CHAR + i as u8);
        for bit in 0..15 {
            if glyph & (1 << (14 - bit)) != 0 {
                INTERNAL_SPRITES.write(mem_bus, cx + bit % 3, cy + bit / 3, COL1);
            }
        }
    }
}
