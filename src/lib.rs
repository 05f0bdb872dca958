pub mod consts;
pub mod bus;
pub mod console;
pub mod clock;
pub mod display;
pub mod input;
pub mod engine;
pub mod error;
pub mod flags;

pub use console::Console;
pub use display::{Color, Pal, COL0, COL1, COL2, COL3, COL4, COL5, COL6, COL7};
pub use engine::{Engine, Host};
pub use error::GolfError;

#[macro_export]
macro_rules! assert_eq_hex {
    ($left:expr, $right:expr) => {
        let left_val = $left;
        let right_val = $right;
        assert!(
            left_val == right_val,
            "assertion `left == right` failed\n  left: 0x{:X}\n right: 0x{:X}",
            left_val, right_val,
        )
    };
}
