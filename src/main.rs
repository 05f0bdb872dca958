use std::{cell::Cell, collections::HashMap, rc::Rc};

use clap::Parser;
use golf::{
    consts::{SCREEN_HEIGHT, SCREEN_WIDTH},
    display::{codec::SCREEN, text::TextOpts, Pal},
    engine::{Frame, Host},
    input::{CursorStyle, InputState, Key, MouseButtons},
    Console, Engine, COL1, COL2, COL3, COL6,
};
use mimalloc::MiMalloc;
use once_cell::sync::Lazy;
use sdl2::{
    event::Event,
    keyboard::Keycode,
    mouse::{Cursor, MouseButton, SystemCursor},
    pixels::PixelFormatEnum,
    render::{Canvas, Texture},
    video::Window,
    EventPump, Sdl,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

// Four colors per palette, 0xRRGGBB
const PALETTES: [[u32; 4]; 16] = [
    [0xE0F8CF, 0x86C06C, 0x306850, 0x071821],
    [0x000000, 0x555555, 0xAAAAAA, 0xFFFFFF],
    [0xFFFFFF, 0xAAAAAA, 0x555555, 0x000000],
    [0x1D2B53, 0x7E2553, 0xFF004D, 0xFFA300],
    [0x008751, 0x00E436, 0xFFEC27, 0xFFF1E8],
    [0x29ADFF, 0x83769C, 0xFF77A8, 0xFFCCAA],
    [0x0F0F1B, 0x565A75, 0xC6B7BE, 0xFAFBF6],
    [0x2C2137, 0x764462, 0xEDB4A1, 0xA96868],
    [0x332C50, 0x46878F, 0x94E344, 0xE2F3E4],
    [0x081820, 0x346856, 0x88C070, 0xE0F8D0],
    [0x000000, 0x0000AA, 0x00AAAA, 0xAAAAAA],
    [0x000000, 0xAA0000, 0xAA5500, 0xFFFF55],
    [0x2B0F54, 0xAB1F65, 0xFF4F69, 0xFFF7F8],
    [0x1E1C32, 0xC6BAAC, 0x7B6F83, 0xF6E8E0],
    [0x3E232C, 0xEDF6D6, 0x9A4F50, 0xC28D75],
    [0x051F39, 0x4A2480, 0xC53A9D, 0xFF8E80],
];

static KEY_MAP: Lazy<HashMap<Keycode, Key>> = Lazy::new(|| {
    let letters = [
        (Keycode::A, Key::A), (Keycode::B, Key::B), (Keycode::C, Key::C), (Keycode::D, Key::D),
        (Keycode::E, Key::E), (Keycode::F, Key::F), (Keycode::G, Key::G), (Keycode::H, Key::H),
        (Keycode::I, Key::I), (Keycode::J, Key::J), (Keycode::K, Key::K), (Keycode::L, Key::L),
        (Keycode::M, Key::M), (Keycode::N, Key::N), (Keycode::O, Key::O), (Keycode::P, Key::P),
        (Keycode::Q, Key::Q), (Keycode::R, Key::R), (Keycode::S, Key::S), (Keycode::T, Key::T),
        (Keycode::U, Key::U), (Keycode::V, Key::V), (Keycode::W, Key::W), (Keycode::X, Key::X),
        (Keycode::Y, Key::Y), (Keycode::Z, Key::Z),
    ];
    let digits = [
        (Keycode::Num0, Key::Num0), (Keycode::Num1, Key::Num1), (Keycode::Num2, Key::Num2),
        (Keycode::Num3, Key::Num3), (Keycode::Num4, Key::Num4), (Keycode::Num5, Key::Num5),
        (Keycode::Num6, Key::Num6), (Keycode::Num7, Key::Num7), (Keycode::Num8, Key::Num8),
        (Keycode::Num9, Key::Num9),
    ];
    let others = [
        (Keycode::Up, Key::Up), (Keycode::Down, Key::Down),
        (Keycode::Left, Key::Left), (Keycode::Right, Key::Right),
        (Keycode::Space, Key::Space), (Keycode::Return, Key::Enter),
        (Keycode::Escape, Key::Escape), (Keycode::Tab, Key::Tab),
        (Keycode::Backspace, Key::Backspace),
        (Keycode::LShift, Key::Shift), (Keycode::RShift, Key::Shift),
        (Keycode::LCtrl, Key::Ctrl), (Keycode::RCtrl, Key::Ctrl),
        (Keycode::LAlt, Key::Alt), (Keycode::RAlt, Key::Alt),
        (Keycode::Comma, Key::Comma), (Keycode::Period, Key::Period),
        (Keycode::Slash, Key::Slash), (Keycode::Semicolon, Key::Semicolon),
        (Keycode::Quote, Key::Quote), (Keycode::Minus, Key::Minus),
        (Keycode::Equals, Key::Equals),
    ];
    letters.into_iter().chain(digits).chain(others).collect()
});

#[derive(Parser)]
#[command(name = "golf")]
#[command(version, about = "Runs the golf demo cart", long_about = None)]
struct Cli {
    /// Window pixels per console pixel
    #[arg(short, long, default_value_t = 4)]
    scale: u32,
}

struct SdlHost<'a> {
    sdl: Sdl,
    canvas: Canvas<Window>,
    texture: Texture<'a>,
    event_pump: EventPump,

    scale: i32,
    input: InputState,
    quit: bool,

    rgb: Vec<u8>,
    cursor_style: Option<CursorStyle>,
    cursor: Option<Cursor>,
}

impl SdlHost<'_> {
    fn apply_cursor(&mut self, style: CursorStyle) {
        if self.cursor_style == Some(style) {return}
        self.cursor_style = Some(style);

        let system = match style {
            CursorStyle::Arrow => SystemCursor::Arrow,
            CursorStyle::Hand => SystemCursor::Hand,
            CursorStyle::Crosshair => SystemCursor::Crosshair,
            CursorStyle::Hidden => {
                self.sdl.mouse().show_cursor(false);
                return;
            }
        };
        self.sdl.mouse().show_cursor(true);
        match Cursor::from_system(system) {
            Ok(cursor) => {
                cursor.set();
                self.cursor = Some(cursor);
            }
            Err(e) => log::warn!("cannot create cursor: {}", e),
        }
    }
}

impl Host for SdlHost<'_> {
    fn poll_input(&mut self, input: &mut InputState) {
        *input = self.input.clone();
    }

    fn present(&mut self, frame: &Frame) {
        let palettes = [PALETTES[frame.pal_a.bits() as usize], PALETTES[frame.pal_b.bits() as usize]];
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let col = SCREEN.read(frame.screen, x as i32, y as i32).unwrap_or_default();
                let rgb = palettes[col.bank() as usize][col.index() as usize];
                let i = (y * SCREEN_WIDTH + x) * 3;
                self.rgb[i..i + 3].copy_from_slice(&rgb.to_be_bytes()[1..]);
            }
        }

        if let Err(e) = self.texture.update(None, &self.rgb, SCREEN_WIDTH * 3) {
            log::error!("texture update failed: {}", e);
        }
        if let Err(e) = self.canvas.copy(&self.texture, None, None) {
            log::error!("canvas copy failed: {}", e);
        }
        self.canvas.present();
        self.apply_cursor(frame.cursor);
    }

    fn next_frame(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown { keycode: Some(keycode), .. } => {
                    if let Some(key) = KEY_MAP.get(&keycode) {
                        self.input.set_key(*key, true);
                    }
                }
                Event::KeyUp { keycode: Some(keycode), .. } => {
                    if let Some(key) = KEY_MAP.get(&keycode) {
                        self.input.set_key(*key, false);
                    }
                }
                Event::MouseMotion { x, y, .. } => {
                    self.input.mouse_x = x / self.scale;
                    self.input.mouse_y = y / self.scale;
                }
                Event::MouseButtonDown { mouse_btn, .. } => {
                    self.input.buttons.insert(mouse_button(mouse_btn));
                }
                Event::MouseButtonUp { mouse_btn, .. } => {
                    self.input.buttons.remove(mouse_button(mouse_btn));
                }
                _ => {}
            }
        }
        !self.quit
    }
}

fn mouse_button(btn: MouseButton) -> MouseButtons {
    match btn {
        MouseButton::Left => MouseButtons::LEFT,
        MouseButton::Middle => MouseButtons::MIDDLE,
        MouseButton::Right => MouseButtons::RIGHT,
        _ => MouseButtons::empty(),
    }
}

/// A small cart that exercises the drawing API.
fn demo() -> Engine {
    let ball = Rc::new(Cell::new((96, 60)));
    let mut velocity = (1, 1);
    let mut pal = 0u8;

    let b = Rc::clone(&ball);
    let update = move |c: &mut Console| {
        if c.btnp(Key::Space) {
            pal = (pal + 1) % 16;
            c.pal_a(Pal::new(pal));
        }

        let (mut x, mut y) = b.get();
        if !(1..=186).contains(&(x + velocity.0)) {velocity.0 = -velocity.0}
        if !(21..=186).contains(&(y + velocity.1)) {velocity.1 = -velocity.1}
        x += velocity.0;
        y += velocity.1;
        b.set((x, y));

        let style = if c.mouse_buttons().is_empty() {CursorStyle::Crosshair} else {CursorStyle::Hand};
        c.set_cursor(style);
    };

    let draw = move |c: &mut Console| {
        c.bg(COL1);
        c.cls();

        let frames = c.frames().to_string();
        c.text_l("GOLF", &TextOpts::default());
        c.text_r(&frames, &TextOpts::default());
        c.rect(0, 20, 192, 172, COL2);

        let (x, y) = ball.get();
        c.rect_fill(x, y, 5, 5, COL3);

        let (mx, my) = c.mouse();
        c.line(x + 2, y + 2, mx as i32, my as i32, COL6);
    };

    Engine::new(update, draw)
}

fn main() -> Result<(), String> {
    env_logger::init();
    let cli = Cli::parse();
    let scale = cli.scale.max(1);

    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;
    let window = video_subsystem
        .window("golf", SCREEN_WIDTH as u32 * scale, SCREEN_HEIGHT as u32 * scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().present_vsync().build().map_err(|e| e.to_string())?;
    let creator = canvas.texture_creator();
    let texture = creator
        .create_texture_streaming(PixelFormatEnum::RGB24, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .map_err(|e| e.to_string())?;
    let event_pump = sdl.event_pump()?;

    let mut host = SdlHost {
        sdl, canvas, texture, event_pump,
        scale: scale as i32,
        input: InputState::new(),
        quit: false,
        rgb: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT * 3],
        cursor_style: None,
        cursor: None,
    };

    let mut engine = demo();
    engine.run(&mut host);
    Ok(())
}
