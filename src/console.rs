use log::debug;

use crate::{bus::mem_bus::MemBus, display::font};

/// The console's whole state: its address space plus the drawing API built on it.
pub struct Console {
    pub(crate) mem_bus: MemBus,

    // TEXT CURSORS
    pub(crate) text_l_line: u8,
    pub(crate) text_r_line: u8,
}

impl Console {
    pub fn new() -> Self {
        let mut console = Self {
            mem_bus: MemBus::new(),
            text_l_line: 0,
            text_r_line: 0,
        };

        console.rclip();
        font::load_internal_sheet(&mut console.mem_bus);
        debug!("console memory initialised");

        console
    }

    pub fn mem(&self) -> &MemBus {
        &self.mem_bus
    }

    /// Both screen planes, as handed to the renderer
    pub fn screen(&self) -> &[u8] {
        self.mem_bus.screen()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::{assert_eq_hex, bus::mem_bus::MemBusConnection, consts::*};

    use super::*;

    #[test]
    fn test_new_console_layout() {
        let console = Console::new();
        assert!(console.screen().iter().all(|&b| b == 0));
        assert_eq_hex!(console.mem().read_mem(CLIP_W), 192);
        assert_eq_hex!(console.mem().read_mem(CLIP_H), 192);
        assert_eq!(console.frames(), 0);
        assert!(console.mem().slice(SPRITE_SHEET, SPRITE_SHEET_LEN).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_internal_sheet_is_loaded_and_bounded() {
        let console = Console::new();
        let sheet = console.mem().slice(INTERNAL_SHEET, INTERNAL_SHEET_LEN);
        assert!(sheet.iter().any(|&b| b != 0));
        assert_eq_hex!(console.mem().read_mem(INTERNAL_SHEET - 1), 0);
        assert_eq_hex!(console.mem().read_mem(INTERNAL_SHEET + INTERNAL_SHEET_LEN as u16), 0);
    }
}
