//! Fixed layout of the console's address space.
//!
//! Every piece of engine state lives at one of these offsets. Multi-byte
//! registers are big-endian.

pub const MEM_SIZE: usize = 0x10000;

pub const SCREEN_WIDTH: usize = 192;
pub const SCREEN_HEIGHT: usize = 192;

// SCREEN
pub const COLOR_PLANE: u16 = 0x0000;
pub const COLOR_PLANE_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT / 4;

pub const PALETTE_PLANE: u16 = 0x2401;
pub const PALETTE_PLANE_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT / 8;

/// Everything below this address is handed to the renderer each tick
pub const SCREEN_BUF_END: usize = PALETTE_PLANE as usize + PALETTE_PLANE_LEN;

// REGISTERS
pub const PALETTE_REG: u16 = 0x3601;
pub const BG_REG: u16 = 0x3602;
pub const CAMERA_X: u16 = 0x3603;
pub const CAMERA_Y: u16 = 0x3605;
pub const FRAMES: u16 = 0x3607;
pub const CLIP_X: u16 = 0x360A;
pub const CLIP_Y: u16 = 0x360B;
pub const CLIP_W: u16 = 0x360C;
pub const CLIP_H: u16 = 0x360D;

// INPUT
pub const MOUSE_X: u16 = 0x360E;
pub const MOUSE_Y: u16 = 0x360F;
pub const MOUSE_BTN: u16 = 0x3610;
pub const KEYBOARD: u16 = 0x3611;
pub const KEYBOARD_LEN: usize = 0x37;

// SPRITES
pub const INTERNAL_SHEET: u16 = 0x3648;
pub const INTERNAL_SHEET_LEN: usize = 0x0900;
pub const INTERNAL_SHEET_WIDTH: usize = 128;
pub const INTERNAL_SHEET_HEIGHT: usize = 48;

pub const SPRITE_SHEET: u16 = 0x3F49;
pub const SPRITE_SHEET_LEN: usize = 0x3000;
pub const SPRITE_SHEET_WIDTH: usize = 256;
pub const SPRITE_SHEET_HEIGHT: usize = 128;

pub const SPRITE_SIZE: usize = 8;
pub const SPRITE_COUNT: usize = (SPRITE_SHEET_WIDTH / SPRITE_SIZE) * (SPRITE_SHEET_HEIGHT / SPRITE_SIZE);
