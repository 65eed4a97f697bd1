// crates/softfade-core/src/loading.rs
//
// Image-load state vocabulary and the widget-side fade driver.
//
// `ImageFade` is what an image widget actually holds: options plus one keyed
// fade slot. Per render tick it answers a single question — "which color
// filter, if any, should this frame be drawn with?" `None` means draw plain:
// either the state isn't one we fade for, the fade is disabled, or the run
// has finished and the filter can be dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::matrix::ColorMatrix;
use crate::transition::KeyedFade;

/// Where a successfully loaded image came from.
///
/// Memory hits are typically drawn without a fade — the image was just on
/// screen, so animating it back in reads as a glitch, not a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    Memory,
    Disk,
    Network,
}

/// Load state of the image a widget is displaying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageLoadState {
    /// Nothing requested yet.
    Empty,
    /// Request in flight.
    Loading,
    /// Image decoded and ready to draw.
    Success { source: DataSource },
    /// Request failed; the widget shows its error content.
    Error,
}

impl ImageLoadState {
    /// True for a `Success` served from the in-memory cache.
    pub fn is_from_memory(&self) -> bool {
        matches!(self, ImageLoadState::Success { source: DataSource::Memory })
    }
}

/// Default fade duration in milliseconds.
pub const DEFAULT_FADE_DURATION_MS: u64 = 1000;

/// Host-facing fade configuration. Serialized with widget/theme settings,
/// so absent fields fall back to sensible defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FadeOptions {
    /// Master switch. Off → images always draw plain.
    #[serde(default = "default_enabled")]
    pub enabled:               bool,
    /// Total fade duration in milliseconds. Zero is valid: the fade snaps
    /// to its terminal values on the first tick.
    #[serde(default = "default_duration_ms")]
    pub duration_ms:           u64,
    /// Skip the fade when the image came straight from the memory cache.
    #[serde(default = "default_skip_memory")]
    pub skip_when_from_memory: bool,
}

fn default_enabled() -> bool { true }
fn default_duration_ms() -> u64 { DEFAULT_FADE_DURATION_MS }
fn default_skip_memory() -> bool { true }

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            enabled:               default_enabled(),
            duration_ms:           default_duration_ms(),
            skip_when_from_memory: default_skip_memory(),
        }
    }
}

impl FadeOptions {
    /// Should `state` be drawn through the fade at all?
    ///
    /// Only a `Success` fades — empty/loading/error states draw their own
    /// content plain. Memory-cache hits are skipped when
    /// `skip_when_from_memory` is set.
    pub fn should_fade(&self, state: &ImageLoadState) -> bool {
        if !self.enabled {
            return false;
        }
        match state {
            ImageLoadState::Success { .. } => {
                !(self.skip_when_from_memory && state.is_from_memory())
            }
            _ => false,
        }
    }
}

/// Per-widget fade driver: options plus one keyed fade slot.
///
/// `K` is the identity of the displayed image (request id, URL hash, …).
/// A new key cancels the old run and starts fresh; the same key keeps the
/// run going across ticks, even across intervening state changes.
#[derive(Clone, Debug, Default)]
pub struct ImageFade<K> {
    opts: FadeOptions,
    slot: KeyedFade<K>,
}

impl<K: PartialEq> ImageFade<K> {
    pub fn new(opts: FadeOptions) -> Self {
        Self { opts, slot: KeyedFade::new() }
    }

    pub fn options(&self) -> &FadeOptions {
        &self.opts
    }

    /// Compute this tick's color filter for the image identified by `key`
    /// in `state`.
    ///
    /// Returns `None` when the frame should be drawn plain — non-success
    /// states, disabled or skipped fades, and finished runs all land here.
    /// A finished run stays in the slot, so the same key keeps returning
    /// `None` instead of fading again.
    pub fn filter_for(&mut self, key: K, state: &ImageLoadState) -> Option<ColorMatrix> {
        if !self.opts.should_fade(state) {
            return None;
        }

        let fade = self
            .slot
            .fetch_or_start(key, Duration::from_millis(self.opts.duration_ms));
        let frame = fade.frame();
        if frame.is_finished {
            return None;
        }

        let mut matrix = ColorMatrix::identity();
        frame.apply_to(&mut matrix);
        Some(matrix)
    }
}
