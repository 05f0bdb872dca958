use crate::{bus::mem_bus::MemBusConnection, console::Console, consts::FRAMES};

const FRAME_MASK: u32 = 0x00FF_FFFF;

impl Console {
    /// Number of frames since the engine started, modulo 2^24
    pub fn frames(&self) -> u32 {
        self.mem_bus.read_mem_24(FRAMES)
    }

    pub(crate) fn add_frame(&mut self) {
        let f = self.frames().wrapping_add(1) & FRAME_MASK;
        self.mem_bus.write_mem_24(FRAMES, f);
    }
}
