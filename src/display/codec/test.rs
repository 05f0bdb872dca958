use crate::assert_eq_hex;
use crate::display::{COL1, COL3, COL5, COL6, COL7};

use super::*;

#[test]
fn test_addressing_matches_screen_layout() {
    assert_eq!(SCREEN.color_addr(0, 0), (0x0000, 0));
    assert_eq!(SCREEN.color_addr(7, 1), (0x0031, 6));
    assert_eq!(SCREEN.palette_addr(9, 1), (0x2401 + 25, 1));
    assert_eq!(SCREEN.color_addr(191, 191), (0x23FF, 6));
    assert_eq!(SCREEN.palette_addr(191, 191), (0x3600, 7));
}

#[test]
fn test_sheet_palette_follows_color_plane() {
    assert_eq_hex!(USER_SPRITES.palette, 0x3F49 + 0x2000);
    assert_eq_hex!(INTERNAL_SPRITES.palette, 0x3648 + 0x600);
}

#[test]
fn test_round_trip_every_pixel_and_color() {
    let mut console = Console::new();
    for y in 0..192 {
        for x in 0..192 {
            for bits in 0..8 {
                let col = Color::from_bits(bits);
                console.pset(x, y, col);
                assert_eq!(console.pget(x, y), Some(col), "({}, {}) = {:03b}", x, y, bits);
            }
        }
    }
}

#[test]
fn test_pset_touches_only_its_two_bytes() {
    let mut console = Console::new();
    let before = console.mem().raw().to_vec();

    console.pset(13, 77, COL7);

    let (i, _) = SCREEN.color_addr(13, 77);
    let (j, _) = SCREEN.palette_addr(13, 77);
    for (addr, (a, b)) in before.iter().zip(console.mem().raw().iter()).enumerate() {
        if addr != i as usize && addr != j as usize {
            assert_eq_hex!(*a, *b);
        }
    }
    assert_eq_hex!(console.mem()[i as usize], 0b11 << 2);
    assert_eq_hex!(console.mem()[j as usize], 1 << 5);
}

#[test]
fn test_neighbours_sharing_a_byte_are_isolated() {
    let mut console = Console::new();
    console.pset(4, 0, COL3);
    console.pset(5, 0, COL5);
    console.pset(6, 0, COL6);
    console.pset(7, 0, COL1);

    assert_eq!(console.pget(4, 0), Some(COL3));
    assert_eq!(console.pget(5, 0), Some(COL5));
    assert_eq!(console.pget(6, 0), Some(COL6));
    assert_eq!(console.pget(7, 0), Some(COL1));

    console.pset(5, 0, COL1);
    assert_eq!(console.pget(4, 0), Some(COL3));
    assert_eq!(console.pget(5, 0), Some(COL1));
    assert_eq!(console.pget(6, 0), Some(COL6));
}

#[test]
fn test_out_of_range_is_ignored() {
    let mut console = Console::new();
    let before = console.mem().raw().to_vec();

    console.pset(-1, 0, COL3);
    console.pset(0, -1, COL3);
    console.pset(192, 0, COL3);
    console.pset(0, 192, COL3);

    assert!(before.iter().eq(console.mem().raw().iter()));
    assert_eq!(console.pget(192, 5), None);
    assert_eq!(console.pget(-3, 5), None);
}
