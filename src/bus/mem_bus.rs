use crate::consts::{MEM_SIZE, SCREEN_BUF_END};

/// The console's whole address space.
///
/// Sixteen bit addresses cover it exactly, so no access can fall outside.
pub struct MemBus {
    ram: Box<[u8; MEM_SIZE]>,
}

pub trait MemBusConnection {
    fn read_mem(&self, addr: u16) -> u8;
    fn write_mem(&mut self, addr: u16, byte: u8);

    fn read_mem_16(&self, addr: u16) -> u16 {
        let bytes = [self.read_mem(addr), self.read_mem(addr.wrapping_add(1))];
        u16::from_be_bytes(bytes)
    }

    fn write_mem_16(&mut self, addr: u16, src: u16) {
        let bytes = src.to_be_bytes();
        self.write_mem(addr, bytes[0]);
        self.write_mem(addr.wrapping_add(1), bytes[1]);
    }

    /// Reads a 24 bit value. The upper byte of the result is always zero.
    fn read_mem_24(&self, addr: u16) -> u32 {
        let bytes = [
            0,
            self.read_mem(addr),
            self.read_mem(addr.wrapping_add(1)),
            self.read_mem(addr.wrapping_add(2)),
        ];
        u32::from_be_bytes(bytes)
    }

    /// Writes the low 24 bits of `src`.
    fn write_mem_24(&mut self, addr: u16, src: u32) {
        let [_, b0, b1, b2] = src.to_be_bytes();
        self.write_mem(addr, b0);
        self.write_mem(addr.wrapping_add(1), b1);
        self.write_mem(addr.wrapping_add(2), b2);
    }
}

impl MemBusConnection for MemBus {
    fn read_mem(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    fn write_mem(&mut self, addr: u16, byte: u8) {
        self.ram[addr as usize] = byte;
    }
}

/// Lets a published screen buffer be decoded with the same codec as live memory.
impl MemBusConnection for [u8] {
    fn read_mem(&self, addr: u16) -> u8 {
        self[addr as usize]
    }

    fn write_mem(&mut self, addr: u16, byte: u8) {
        self[addr as usize] = byte;
    }
}

impl MemBus {
    pub fn new() -> Self {
        Self {ram: Box::new([0; MEM_SIZE])}
    }

    pub fn slice(&self, addr: u16, len: usize) -> &[u8] {
        &self.ram[addr as usize..addr as usize + len]
    }

    pub fn slice_mut(&mut self, addr: u16, len: usize) -> &mut [u8] {
        &mut self.ram[addr as usize..addr as usize + len]
    }

    /// The bytes a renderer needs to draw one frame: both screen planes.
    pub fn screen(&self) -> &[u8] {
        &self.ram[..SCREEN_BUF_END]
    }

    pub fn raw(&self) -> &[u8; MEM_SIZE] {
        &self.ram
    }
}

impl Default for MemBus {
    fn default() -> Self {
        Self::new()
    }
}
