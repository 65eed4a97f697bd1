// crates/softfade-core/src/channel.rs
//
// Declarative tween channels.
//
// Each animated signal of the fade is a `Channel`: a start value, an end
// value, the fraction of the total fade duration it runs over, and an easing
// curve. All channels are evaluated against the same overall-progress clock,
// so adding a signal never means duplicating tween logic.
//
// The stock fade uses three channels with staggered windows:
//
//   signal      start → end    window
//   alpha        0.0  → 1.0    first 50 % of the duration
//   brightness   0.8  → 1.0    first 75 %
//   saturation   0.0  → 1.0    full duration
//
// A channel that has exhausted its window holds its end value — it never
// overshoots or oscillates.

use serde::{Deserialize, Serialize};

use crate::easing::{clamp01, lerp, Easing};

/// One animated scalar of the fade, tweened over a fraction of the total
/// duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Value at overall progress 0.0.
    pub start:   f32,
    /// Value held from the end of the window onward.
    pub end:     f32,
    /// Fraction of the total fade duration this channel animates over,
    /// in (0.0, 1.0]. Non-positive means the tween is zero-length and the
    /// channel sits at `end` for the whole run.
    pub portion: f32,
    /// Curve applied to the channel-local progress before interpolating.
    pub easing:  Easing,
}

impl Channel {
    pub const fn new(start: f32, end: f32, portion: f32, easing: Easing) -> Self {
        Self { start, end, portion, easing }
    }

    /// Sample this channel at `overall` progress of the *total* fade
    /// duration (elapsed / total, any range — clamped to [0, 1]).
    ///
    /// The overall progress is rescaled onto this channel's window, so a
    /// channel with `portion = 0.5` reaches its end value at the halfway
    /// point of the fade and holds it from there.
    ///
    /// ```
    /// use softfade_core::channel::ALPHA;
    /// assert_eq!(ALPHA.sample(0.0), 0.0);
    /// assert_eq!(ALPHA.sample(0.5), 1.0);  // window exhausted at 50 %
    /// assert_eq!(ALPHA.sample(1.0), 1.0);
    /// ```
    pub fn sample(&self, overall: f32) -> f32 {
        if self.portion <= 0.0 {
            return self.end;
        }
        let local = clamp01(clamp01(overall) / self.portion);
        lerp(self.start, self.end, self.easing.apply(local))
    }
}

// ── The stock fade channels ───────────────────────────────────────────────────

/// Opacity: fully transparent → opaque over the first half of the fade.
pub const ALPHA: Channel = Channel::new(0.0, 1.0, 0.5, Easing::Linear);

/// Brightness: slightly washed out (offset toward white) → neutral over the
/// first three quarters of the fade.
pub const BRIGHTNESS: Channel = Channel::new(0.8, 1.0, 0.75, Easing::Linear);

/// Saturation: grayscale → full color over the whole fade.
pub const SATURATION: Channel = Channel::new(0.0, 1.0, 1.0, Easing::Linear);
