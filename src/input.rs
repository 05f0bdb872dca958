use bitflags::bitflags;

use crate::{bus::mem_bus::MemBusConnection, console::Console, consts::*};

bitflags! {
    /// Bitflags representing each mouse button
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct MouseButtons: u8 {
        const LEFT   = 0b0000_0001;
        const MIDDLE = 0b0000_0010;
        const RIGHT  = 0b0000_0100;
    }
}

bitflags! {
    /// The byte each key occupies in the keyboard region
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct KeyState: u8 {
        const HELD     = 0b0000_0001;
        /// Went down this tick
        const PRESSED  = 0b0000_0010;
        /// Went up this tick
        const RELEASED = 0b0000_0100;
    }
}

const CURSOR_SHIFT: u8 = 6;
const BUTTON_MASK: u8 = 0b0011_1111;

/// Cursor style stored in the top two bits of the mouse button register
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Arrow = 0,
    Hand = 1,
    Crosshair = 2,
    Hidden = 3,
}

impl CursorStyle {
    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Arrow,
            1 => Self::Hand,
            2 => Self::Crosshair,
            _ => Self::Hidden,
        }
    }
}

/// Keys tracked by the console. The discriminant is the key's offset in the keyboard region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
    Up, Down, Left, Right,
    Space, Enter, Escape, Shift, Ctrl, Alt, Tab, Backspace,
    Comma, Period, Slash, Semicolon, Quote, Minus, Equals,
}

impl Key {
    pub const ALL: [Key; KEYBOARD_LEN] = {
        use Key::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M,
            N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
            Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
            Up, Down, Left, Right,
            Space, Enter, Escape, Shift, Ctrl, Alt, Tab, Backspace,
            Comma, Period, Slash, Semicolon, Quote, Minus, Equals,
        ]
    };

    fn addr(self) -> u16 {
        KEYBOARD + self as u16
    }
}

/// What the host saw this tick. Handed to the console once per tick.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub buttons: MouseButtons,
    held: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: Key, pressed: bool) {
        let bit = 1u64 << key as u8;
        if pressed {self.held |= bit} else {self.held &= !bit}
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & (1u64 << key as u8) != 0
    }
}

impl Console {
    /// Writes the host's input into the input registers, deriving press and
    /// release edges from the previous tick's keyboard bytes.
    pub fn sample_input(&mut self, input: &InputState) {
        let max_x = SCREEN_WIDTH as i32 - 1;
        let max_y = SCREEN_HEIGHT as i32 - 1;
        self.mem_bus.write_mem(MOUSE_X, input.mouse_x.clamp(0, max_x) as u8);
        self.mem_bus.write_mem(MOUSE_Y, input.mouse_y.clamp(0, max_y) as u8);

        let btn = self.mem_bus.read_mem(MOUSE_BTN) & !BUTTON_MASK;
        self.mem_bus.write_mem(MOUSE_BTN, btn | input.buttons.bits());

        for key in Key::ALL {
            let was = KeyState::from_bits_truncate(self.mem_bus.read_mem(key.addr())).contains(KeyState::HELD);
            let now = input.is_held(key);

            let mut state = KeyState::empty();
            state.set(KeyState::HELD, now);
            state.set(KeyState::PRESSED, now && !was);
            state.set(KeyState::RELEASED, !now && was);
            self.mem_bus.write_mem(key.addr(), state.bits());
        }
    }

    /// Mouse position on screen
    pub fn mouse(&self) -> (u8, u8) {
        (self.mem_bus.read_mem(MOUSE_X), self.mem_bus.read_mem(MOUSE_Y))
    }

    pub fn mouse_buttons(&self) -> MouseButtons {
        MouseButtons::from_bits_truncate(self.mem_bus.read_mem(MOUSE_BTN))
    }

    /// Asks the host to draw the mouse cursor in the given style
    pub fn set_cursor(&mut self, style: CursorStyle) {
        let btn = self.mem_bus.read_mem(MOUSE_BTN) & BUTTON_MASK;
        self.mem_bus.write_mem(MOUSE_BTN, btn | ((style as u8) << CURSOR_SHIFT));
    }

    pub fn cursor(&self) -> CursorStyle {
        CursorStyle::from_bits(self.mem_bus.read_mem(MOUSE_BTN) >> CURSOR_SHIFT)
    }

    pub fn key(&self, key: Key) -> KeyState {
        KeyState::from_bits_truncate(self.mem_bus.read_mem(key.addr()))
    }

    /// Is the key held down
    pub fn btn(&self, key: Key) -> bool {
        self.key(key).contains(KeyState::HELD)
    }

    /// Did the key go down this tick
    pub fn btnp(&self, key: Key) -> bool {
        self.key(key).contains(KeyState::PRESSED)
    }

    /// Did the key go up this tick
    pub fn btnr(&self, key: Key) -> bool {
        self.key(key).contains(KeyState::RELEASED)
    }
}
