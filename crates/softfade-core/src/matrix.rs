// crates/softfade-core/src/matrix.rs
//
// 4×5 color transformation matrix.
//
// Rows map the output (R, G, B, A) channels; columns 0–3 are the linear
// weights over the input channels and column 4 is an additive offset.
// Channel values are in 0–255 space, so the offset column is too — this is
// the convention the brightness formula below assumes.
//
// The fade touches three disjoint regions:
//   - saturation → the 3×3 RGB block (rows/cols 0–2), overwritten wholesale
//   - brightness → the offset column (col 4, rows 0–2)
//   - alpha      → cell (3, 3)
// so the three setters compose freely on one matrix without stepping on
// each other.

use std::ops::{Index, IndexMut};

use crate::transition::FadeFrame;

/// Number of rows (output channels R, G, B, A).
pub const ROWS: usize = 4;
/// Number of columns (input channels R, G, B, A plus the offset column).
pub const COLS: usize = 5;

/// BT.601-ish luminance weights. With these, desaturating preserves
/// perceived brightness instead of averaging the channels.
const LUMA_R: f32 = 0.213;
const LUMA_G: f32 = 0.715;
const LUMA_B: f32 = 0.072;

/// Row-major 4×5 color matrix over 0–255 channel values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix {
    m: [f32; ROWS * COLS],
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorMatrix {
    /// Identity transform: unit diagonal on the linear block, zero offsets.
    pub fn identity() -> Self {
        let mut m = [0.0; ROWS * COLS];
        for row in 0..ROWS {
            m[row * COLS + row] = 1.0;
        }
        Self { m }
    }

    /// Read cell (`row`, `col`). Panics on an out-of-range index.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[Self::offset(row, col)]
    }

    /// Write cell (`row`, `col`). Panics on an out-of-range index rather
    /// than corrupting a neighbouring cell.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: f32) {
        self.m[Self::offset(row, col)] = v;
    }

    #[inline]
    fn offset(row: usize, col: usize) -> usize {
        assert!(
            row < ROWS && col < COLS,
            "ColorMatrix: index ({row}, {col}) out of range for {ROWS}×{COLS}",
        );
        row * COLS + col
    }

    /// Overwrite the 3×3 RGB block with a luminance-preserving saturation
    /// transform.
    ///
    /// `saturation = 0.0` → grayscale (every RGB row becomes the luminance
    /// weights), `1.0` → identity block. Values outside [0, 1] extrapolate
    /// linearly; they are not rejected.
    ///
    /// This is a direct construction, not an incremental blend — calling it
    /// twice with different values is the same as calling it once with the
    /// last value.
    pub fn set_saturation(&mut self, saturation: f32) {
        let inv = 1.0 - saturation;
        let r = LUMA_R * inv;
        let g = LUMA_G * inv;
        let b = LUMA_B * inv;

        self.set(0, 0, r + saturation);
        self.set(0, 1, g);
        self.set(0, 2, b);
        self.set(1, 0, r);
        self.set(1, 1, g + saturation);
        self.set(1, 2, b);
        self.set(2, 0, r);
        self.set(2, 1, g);
        self.set(2, 2, b + saturation);
    }

    /// Write the brightness offset `(1 − brightness) × 255` into the RGB
    /// rows of the offset column.
    ///
    /// `brightness = 1.0` → zero offset (neutral); `0.8` → +51, the washed-
    /// out look the fade starts from; `0.0` → +255.
    pub fn set_brightness(&mut self, brightness: f32) {
        let offset = (1.0 - brightness) * 255.0;
        self.set(0, 4, offset);
        self.set(1, 4, offset);
        self.set(2, 4, offset);
    }

    /// Write the alpha scale into cell (3, 3). Touches nothing else.
    pub fn set_alpha(&mut self, alpha: f32) {
        self.set(3, 3, alpha);
    }

    /// Run one pixel's `[R, G, B, A]` (0–255 space) through the matrix.
    ///
    /// No clamping — quantization back to bytes is the caller's job, so
    /// out-of-range matrix values extrapolate as-is.
    pub fn transform(&self, px: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            let base = row * COLS;
            *o = self.m[base] * px[0]
                + self.m[base + 1] * px[1]
                + self.m[base + 2] * px[2]
                + self.m[base + 3] * px[3]
                + self.m[base + 4];
        }
        out
    }
}

impl Index<(usize, usize)> for ColorMatrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.m[Self::offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for ColorMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.m[Self::offset(row, col)]
    }
}

impl FadeFrame {
    /// Fold this frame's three signals into `matrix` — the per-tick update
    /// the render loop performs before applying the filter.
    pub fn apply_to(&self, matrix: &mut ColorMatrix) {
        matrix.set_saturation(self.saturation);
        matrix.set_brightness(self.brightness);
        matrix.set_alpha(self.alpha);
    }
}
