use crate::assert_eq_hex;
use crate::bus::mem_bus::MemBusConnection;
use crate::display::{COL0, COL1, COL2, COL3, COL6};

use super::*;

/// Paints sprite `n` of the sheet with a diagonal of COL2 and a COL3 top-right corner.
fn paint_sprite(console: &mut Console, n: i32) {
    let sx = (n % 32) * 8;
    let sy = (n / 32) * 8;
    for i in 0..8 {
        USER_SPRITES.write(&mut console.mem_bus, sx + i, sy + i, COL2);
    }
    USER_SPRITES.write(&mut console.mem_bus, sx + 7, sy, COL3);
}

#[test]
fn test_load_sprs_copies_verbatim() {
    let mut console = Console::new();
    let sheet: Vec<u8> = (0..SPRITE_SHEET_LEN).map(|i| i as u8).collect();
    console.load_sprs(&sheet).unwrap();

    assert_eq_hex!(console.mem().read_mem(0x3F49), 0x00);
    assert_eq_hex!(console.mem().read_mem(0x3F4A), 0x01);
    assert_eq_hex!(console.mem().read_mem(0x6F48), 0xFF);
    assert_eq_hex!(console.mem().read_mem(0x6F49), 0x00);
    assert_eq_hex!(console.mem().read_mem(0x3F48), 0x00);
}

#[test]
fn test_load_sprs_rejects_wrong_length() {
    let mut console = Console::new();
    assert!(matches!(console.load_sprs(&[0; 0x2FFF]), Err(GolfError::SheetLength(0x2FFF))));
    assert!(matches!(console.load_sprs(&[0; 0x3001]), Err(GolfError::SheetLength(0x3001))));
    assert!(console.mem().slice(SPRITE_SHEET, SPRITE_SHEET_LEN).iter().all(|&b| b == 0));
}

#[test]
fn test_spr_copies_tile() {
    let mut console = Console::new();
    paint_sprite(&mut console, 33);
    console.spr(33, 10, 20, &SprOpts::default());

    for i in 0..8 {
        assert_eq!(console.pget(10 + i, 20 + i), Some(COL2));
    }
    assert_eq!(console.pget(17, 20), Some(COL3));
    assert_eq!(console.pget(11, 20), Some(COL0));
}

#[test]
fn test_spr_flips() {
    let mut console = Console::new();
    paint_sprite(&mut console, 0);
    console.spr(0, 0, 0, &SprOpts {flip_h: true, ..Default::default()});
    assert_eq!(console.pget(0, 0), Some(COL3));
    assert_eq!(console.pget(7, 0), Some(COL2));
    assert_eq!(console.pget(0, 7), Some(COL2));

    let mut console = Console::new();
    paint_sprite(&mut console, 0);
    console.spr(0, 0, 0, &SprOpts {flip_v: true, ..Default::default()});
    assert_eq!(console.pget(7, 7), Some(COL3));
    assert_eq!(console.pget(0, 7), Some(COL2));
}

#[test]
fn test_spr_transparency_and_swaps() {
    let mut console = Console::new();
    paint_sprite(&mut console, 1);
    console.bg(COL1);
    console.cls();

    let opts = SprOpts {
        transparent: Some(COL0),
        pal_swap: vec![(COL2, COL6)],
        ..Default::default()
    };
    console.spr(1, 0, 0, &opts);

    assert_eq!(console.pget(0, 0), Some(COL6));
    assert_eq!(console.pget(7, 0), Some(COL3));
    assert_eq!(console.pget(1, 0), Some(COL1));
}

#[test]
fn test_spr_block_and_bounds() {
    let mut console = Console::new();
    paint_sprite(&mut console, 1);
    console.spr(0, 0, 0, &SprOpts {width: 2, ..Default::default()});
    assert_eq!(console.pget(8, 0), Some(COL2));
    assert_eq!(console.pget(15, 0), Some(COL3));

    let before = console.screen().to_vec();
    console.spr(-1, 0, 0, &SprOpts::default());
    console.spr(512, 0, 0, &SprOpts::default());
    assert_eq!(before, console.screen());
}

#[test]
fn test_sspr_uses_camera() {
    let mut console = Console::new();
    paint_sprite(&mut console, 0);
    console.camera(5, 5);
    console.sspr(0, 0, 8, 8, 5, 5, &SprOpts::default());
    assert_eq!(console.pget(0, 0), Some(COL2));
    assert_eq!(console.pget(7, 0), Some(COL3));
}

#[test]
fn test_spr_with_extreme_coordinates() {
    let mut console = Console::new();
    paint_sprite(&mut console, 0);
    console.camera(100, 100);
    console.spr(0, i32::MAX, i32::MAX, &SprOpts::default());
    console.spr(0, i32::MIN, i32::MIN, &SprOpts::default());
    console.spr(0, 0, 0, &SprOpts {width: i32::MAX, height: i32::MAX, flip_h: true, flip_v: true, ..Default::default()});
    console.camera(0, 0);
    assert!(console.screen().iter().all(|&b| b == 0));

    console.spr(0, 0, 0, &SprOpts {width: i32::MAX, ..Default::default()});
    assert_eq!(console.pget(0, 0), Some(COL2));
    assert_eq!(console.pget(7, 0), Some(COL3));
}

#[test]
fn test_sspr_with_extreme_coordinates() {
    let mut console = Console::new();
    paint_sprite(&mut console, 0);
    console.sspr(i32::MIN, i32::MIN, i32::MAX, i32::MAX, i32::MIN, i32::MIN, &SprOpts::default());
    console.sspr(i32::MAX, i32::MAX, i32::MAX, i32::MAX, 0, 0, &SprOpts {flip_h: true, flip_v: true, ..Default::default()});
    console.sspr(0, 0, i32::MIN, i32::MIN, 0, 0, &SprOpts::default());
    assert!(console.screen().iter().all(|&b| b == 0));

    console.sspr(0, 0, i32::MAX, i32::MAX, 0, 0, &SprOpts::default());
    assert_eq!(console.pget(0, 0), Some(COL2));
    assert_eq!(console.pget(7, 0), Some(COL3));
    assert_eq!(console.pget(191, 191), Some(COL0));
}
