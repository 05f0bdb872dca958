use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GolfError {
    #[error("sprite sheet must be exactly 0x3000 bytes, got {0:#X}")]
    SheetLength(usize),
}
