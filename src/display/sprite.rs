use log::debug;

use crate::{console::Console, consts::*, error::GolfError};

use super::{codec::USER_SPRITES, viewport::span, Color};

const SHEET_COLS: i32 = (SPRITE_SHEET_WIDTH / SPRITE_SIZE) as i32;

/// Additional options for drawing sprites
#[derive(Clone, Debug, Default)]
pub struct SprOpts {
    pub flip_h: bool,
    pub flip_v: bool,
    /// Pixels of this color (before substitution) are skipped
    pub transparent: Option<Color>,
    /// Palette swaps as (from, to). The first matching pair wins.
    pub pal_swap: Vec<(Color, Color)>,
    /// Size in tiles for `spr`. Zero counts as one.
    pub width: i32,
    pub height: i32,
}

fn sub_pixel(swaps: &[(Color, Color)], col: Color) -> Color {
    swaps.iter()
        .find(|(from, _)| *from == col)
        .map_or(col, |(_, to)| *to)
}

impl Console {
    /// Loads a sprite sheet verbatim into sprite memory.
    pub fn load_sprs(&mut self, sheet: &[u8]) -> Result<(), GolfError> {
        if sheet.len() != SPRITE_SHEET_LEN {
            return Err(GolfError::SheetLength(sheet.len()));
        }
        self.mem_bus.slice_mut(SPRITE_SHEET, SPRITE_SHEET_LEN).copy_from_slice(sheet);
        debug!("loaded {} byte sprite sheet", sheet.len());
        Ok(())
    }

    /// Draws 8x8 sprite `n` from the sprite sheet at (x, y).
    ///
    /// With `opts.width`/`opts.height` a block of neighbouring tiles is drawn instead.
    pub fn spr(&mut self, n: i32, x: i32, y: i32, opts: &SprOpts) {
        if n < 0 || n as usize >= SPRITE_COUNT {return}
        let size = SPRITE_SIZE as i32;
        let sx = (n % SHEET_COLS) * size;
        let sy = (n / SHEET_COLS) * size;
        let w = opts.width.max(1).saturating_mul(size);
        let h = opts.height.max(1).saturating_mul(size);
        self.sspr(sx, sy, w, h, x, y, opts);
    }

    /// Draws a rectangle of the sprite sheet at (dx, dy).
    ///
    /// Pixels outside the sheet are skipped.
    #[allow(clippy::too_many_arguments)]
    pub fn sspr(&mut self, sx: i32, sy: i32, sw: i32, sh: i32, dx: i32, dy: i32, opts: &SprOpts) {
        let (dx, dy) = self.to_screen(dx, dy);
        let (sx, sy, sw, sh) = (sx as i64, sy as i64, sw as i64, sh as i64);
        let clip = self.clip_get();
        let cols = span(dx, sw, &clip.xs());

        for y in span(dy, sh, &clip.ys()) {
            let row = y - dy;
            let src_y = if opts.flip_v {sy + sh - 1 - row} else {sy + row};
            for x in cols.clone() {
                let col = x - dx;
                let src_x = if opts.flip_h {sx + sw - 1 - col} else {sx + col};
                let Some(pixel) = self.sheet_pixel(src_x, src_y) else {continue};
                if opts.transparent == Some(pixel) {continue}
                self.plot(x, y, sub_pixel(&opts.pal_swap, pixel));
            }
        }
    }

    fn sheet_pixel(&self, x: i64, y: i64) -> Option<Color> {
        let (x, y) = (i32::try_from(x).ok()?, i32::try_from(y).ok()?);
        USER_SPRITES.read(&self.mem_bus, x, y)
    }
}

#[cfg(test)]
mod test;
