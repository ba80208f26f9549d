use crate::ScreenSize;
use crate::world::Snapshot;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Each terminal character is a 2x4 grid of braille dots
const DOTS_X: usize = 2;
const DOTS_Y: usize = 4;

/// Smallest cell that still has a terminal character of its own in every row and column.
/// Below this a character spans more than one cell row, and clicks can't tell them apart.
pub const MIN_CELL_SIZE: usize = DOTS_Y;

/// Draws a grid onto the terminal with braille characters.
///
/// A cell is drawn as a `cell_size` by `cell_size` square of dots, with cell `(x, y)` at dot
/// `(x * cell_size, y * cell_size)`. Whatever does not fit on screen is clipped. Cell sizes
/// below [`MIN_CELL_SIZE`] are raised to it.
pub struct Camera {
    /// The dot buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the dot buffer
    w: usize,

    /// Height of the dot buffer
    h: usize,

    /// Side length of a cell, in dots
    cell_size: usize,
}

impl Camera {
    /// Create a camera covering `cols` by `rows` terminal characters
    pub fn new(cols: ScreenSize, rows: ScreenSize, cell_size: usize) -> Self {
        let (w, h) = Self::dots(cols, rows);

        // For each braille character, we need 3 bytes, and for each newline one byte. With
        // `bw = ceil(w / 2)` and `bh = ceil(h / 4)` braille characters per row and column,
        // this gives a framebuffer of length `3 * (bw * bh) + bh`.
        let (bw, bh) = (w.div_ceil(DOTS_X), h.div_ceil(DOTS_Y));

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
            cell_size: cell_size.max(MIN_CELL_SIZE),
        }
    }

    /// Width of the camera in dots
    pub fn width(&self) -> usize {
        self.w
    }

    /// Height of the camera in dots
    pub fn height(&self) -> usize {
        self.h
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        *self = Self::new(cols, rows, self.cell_size);
    }

    /// The cell under terminal character `(col, row)`, or `None` if the character isn't
    /// covered by the camera.
    ///
    /// This is plain integer division, and may well land outside of the grid. It's up to the
    /// caller to check.
    pub fn cell_at(&self, col: ScreenSize, row: ScreenSize) -> Option<(usize, usize)> {
        let x = col as usize * DOTS_X;
        let y = row as usize * DOTS_Y;

        if x >= self.w || y >= self.h {
            return None;
        }

        Some((x / self.cell_size, y / self.cell_size))
    }

    /// Reset the dot buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Draw every live cell of `snapshot`
    pub fn draw(&mut self, snapshot: &Snapshot) {
        let s = self.cell_size;

        for (x, y, alive) in snapshot.iter() {
            if alive {
                self.draw_square(x.saturating_mul(s), y.saturating_mul(s), s);
            }
        }
    }

    /// Turns on a square grid of dots, clipping whatever falls outside of the buffer
    fn draw_square(&mut self, x: usize, y: usize, s: usize) {
        if x >= self.w || y >= self.h {
            return;
        }

        let x_end = x.saturating_add(s).min(self.w);
        let y_end = y.saturating_add(s).min(self.h);

        for y in y..y_end {
            let i = self.xy_from(x, y);
            let j = self.xy_from(x_end, y);

            self.cb[i..j].fill(true);
        }
    }

    /// Turn the dot buffer into lines of braille characters
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(DOTS_X);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);

                self.cp[(y / DOTS_Y) * bw + (x / DOTS_X)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint lies within U+2800..=U+28FF
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn dots(cols: ScreenSize, rows: ScreenSize) -> (usize, usize) {
        (cols as usize * DOTS_X, rows as usize * DOTS_Y)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
