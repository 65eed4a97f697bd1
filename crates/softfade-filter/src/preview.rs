// crates/softfade-filter/src/preview.rs
//
// Render a fade as a numbered PNG sequence.
//
// Development aid for eyeballing the curve: samples the transition at evenly
// spaced elapsed times from 0 to the full duration and writes one RGBA PNG
// per sample. The last frame is always the unfiltered source image (the fade
// is finished there), which doubles as a sanity check when flipping through
// the files.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use softfade_core::FadeTransition;

use crate::apply::apply_frame;

/// Sample the fade `frames` times (first at elapsed 0, last at `total`) and
/// write each result as `fade_NNN.png` under `dir`. Returns the written
/// paths in frame order.
///
/// `frames` must be at least 2 — a single frame can't show both ends of the
/// curve. `dir` must already exist.
pub fn render_preview(
    rgba:   &[u8],
    width:  u32,
    height: u32,
    total:  Duration,
    frames: usize,
    dir:    &Path,
) -> Result<Vec<PathBuf>> {
    if frames < 2 {
        anyhow::bail!("preview needs at least 2 frames, got {frames}");
    }

    let fade = FadeTransition::new(total);
    let mut paths = Vec::with_capacity(frames);

    for i in 0..frames {
        let elapsed = total.mul_f64(i as f64 / (frames - 1) as f64);
        let frame = fade.sample_at(elapsed);

        let mut buf = rgba.to_vec();
        apply_frame(&frame, &mut buf, width, height)?;

        let path = dir.join(format!("fade_{i:03}.png"));
        write_png(&path, &buf, width, height)
            .with_context(|| format!("writing preview frame {}", path.display()))?;
        paths.push(path);
    }

    Ok(paths)
}

fn write_png(path: &Path, rgba: &[u8], width: u32, height: u32) -> Result<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_png(path: &Path) -> (Vec<u8>, u32, u32) {
        let decoder = png::Decoder::new(File::open(path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (buf, info.width, info.height)
    }

    fn source_2x2() -> Vec<u8> {
        // Four distinct saturated pixels so desaturation is visible.
        vec![
            255, 0, 0, 255,    0, 255, 0, 255,
            0, 0, 255, 255,    255, 255, 0, 255,
        ]
    }

    #[test]
    fn too_few_frames_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_preview(&source_2x2(), 2, 2, Duration::from_millis(100), 1, dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("at least 2 frames"), "{err}");
    }

    #[test]
    fn writes_one_png_per_frame_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths =
            render_preview(&source_2x2(), 2, 2, Duration::from_millis(400), 5, dir.path())
                .unwrap();

        assert_eq!(paths.len(), 5);
        for (i, path) in paths.iter().enumerate() {
            assert!(path.exists(), "missing frame {i}: {}", path.display());
            assert_eq!(
                path.file_name().unwrap().to_str().unwrap(),
                format!("fade_{i:03}.png"),
            );
        }
    }

    #[test]
    fn first_frame_is_transparent_last_frame_is_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = source_2x2();
        let paths = render_preview(&src, 2, 2, Duration::from_millis(400), 4, dir.path()).unwrap();

        let (first, w, h) = read_png(&paths[0]);
        assert_eq!((w, h), (2, 2));
        // Elapsed 0: alpha channel is 0 everywhere.
        for px in first.chunks_exact(4) {
            assert_eq!(px[3], 0);
        }

        // Elapsed = total: fade finished, identity filter.
        let (last, _, _) = read_png(&paths[3]);
        assert_eq!(last, src);
    }
}
