// crates/softfade-filter/src/apply.rs
//
// Apply a color matrix to a packed RGBA8 buffer.
//
// Buffer contract: `rgba` is packed row-major RGBA8 with no stride padding —
// exactly `width × height × 4` bytes. Anything else is rejected up front;
// silently processing a misshapen buffer would smear channels across pixel
// boundaries.
//
// The matrix operates in 0–255 channel space (see softfade-core::matrix), so
// bytes are widened to f32, transformed, then rounded and clamped back.

use anyhow::Result;
use rayon::prelude::*;

use softfade_core::{ColorMatrix, FadeFrame};

/// Run every pixel of `rgba` through `matrix`, in place.
///
/// Rows are processed in parallel; each row is owned by exactly one worker,
/// so no pixel is written twice.
pub fn apply_matrix(matrix: &ColorMatrix, rgba: &mut [u8], width: u32, height: u32) -> Result<()> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        anyhow::bail!(
            "rgba buffer length {} ≠ expected {} for {}×{}",
            rgba.len(),
            expected,
            width,
            height,
        );
    }
    if rgba.is_empty() {
        return Ok(());
    }

    let row_bytes = width as usize * 4;
    rgba.par_chunks_exact_mut(row_bytes).for_each(|row| {
        for px in row.chunks_exact_mut(4) {
            let out = matrix.transform([
                px[0] as f32,
                px[1] as f32,
                px[2] as f32,
                px[3] as f32,
            ]);
            for (dst, v) in px.iter_mut().zip(out) {
                *dst = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    Ok(())
}

/// Convenience: fold one sampled `FadeFrame` into a fresh identity matrix
/// and apply it. This is the whole per-tick pixel path of the fade.
pub fn apply_frame(frame: &FadeFrame, rgba: &mut [u8], width: u32, height: u32) -> Result<()> {
    let mut matrix = ColorMatrix::identity();
    frame.apply_to(&mut matrix);
    apply_matrix(&matrix, rgba, width, height)
}
