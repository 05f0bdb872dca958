use log::{debug, trace};

use crate::{console::Console, display::Pal, input::{CursorStyle, InputState}};

/// What the host gets once per tick.
///
/// `screen` is the bit-exact copy of both screen planes; the registers a
/// renderer needs to interpret it ride alongside.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub screen: &'a [u8],
    pub pal_a: Pal,
    pub pal_b: Pal,
    pub cursor: CursorStyle,
}

/// The outside world the engine runs in: something that supplies input,
/// shows finished frames and paces the loop.
pub trait Host {
    /// Fills in the input seen since the previous tick.
    fn poll_input(&mut self, input: &mut InputState);
    /// Receives the finished frame.
    fn present(&mut self, frame: &Frame);
    /// Called after each presented frame. Blocks until the next frame is due
    /// and returns false once the host shuts down.
    fn next_frame(&mut self) -> bool;
}

pub type Callback = Box<dyn FnMut(&mut Console)>;

pub struct Engine {
    // STATE
    console: Console,
    input: InputState,

    // GAME
    update: Callback,
    draw: Callback,
}

impl Engine {
    pub fn new(update: impl FnMut(&mut Console) + 'static, draw: impl FnMut(&mut Console) + 'static) -> Self {
        debug!("starting engine");
        Self {
            console: Console::new(),
            input: InputState::new(),
            update: Box::new(update),
            draw: Box::new(draw),
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Runs one frame: advance the clock, update, draw, sample input and hand
    /// the screen to the host.
    pub fn tick(&mut self, host: &mut impl Host) {
        self.console.add_frame();
        trace!("frame {}", self.console.frames());

        (self.update)(&mut self.console);
        (self.draw)(&mut self.console);

        host.poll_input(&mut self.input);
        self.console.sample_input(&self.input);

        let (pal_a, pal_b) = self.console.pal_get();
        host.present(&Frame {
            screen: self.console.screen(),
            pal_a, pal_b,
            cursor: self.console.cursor(),
        });
    }

    /// Ticks, then asks the host for the next frame, until the host stops.
    /// The first frame is drawn without waiting.
    pub fn run(&mut self, host: &mut impl Host) {
        loop {
            self.tick(host);
            if !host.next_frame() {break}
        }
        debug!("host stopped after {} frames", self.console.frames());
    }
}
