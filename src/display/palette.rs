use crate::{bus::mem_bus::MemBusConnection, console::Console, consts::{BG_REG, PALETTE_REG}};

use super::{Color, Pal};

impl Console {
    /// Sets palette A, used by pixels in bank 0
    pub fn pal_a(&mut self, pal: Pal) {
        let reg = self.mem_bus.read_mem(PALETTE_REG) & 0b0000_1111;
        self.mem_bus.write_mem(PALETTE_REG, reg | (pal.bits() << 4));
    }

    /// Sets palette B, used by pixels in bank 1
    pub fn pal_b(&mut self, pal: Pal) {
        let reg = self.mem_bus.read_mem(PALETTE_REG) & 0b1111_0000;
        self.mem_bus.write_mem(PALETTE_REG, reg | pal.bits());
    }

    /// Returns the currently selected palettes as (A, B)
    pub fn pal_get(&self) -> (Pal, Pal) {
        let reg = self.mem_bus.read_mem(PALETTE_REG);
        (Pal::new(reg >> 4), Pal::new(reg))
    }

    /// Sets the color `cls` fills the screen with.
    ///
    /// Stored in the top three bits of the register: bank in bit 7, index in bits 6-5.
    pub fn bg(&mut self, col: Color) {
        let reg = self.mem_bus.read_mem(BG_REG) & 0b0001_1111;
        self.mem_bus.write_mem(BG_REG, reg | (col.bits() << 5));
    }

    pub fn bg_get(&self) -> Color {
        Color::from_bits(self.mem_bus.read_mem(BG_REG) >> 5)
    }
}
