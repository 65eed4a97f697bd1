// crates/softfade-core/src/easing.rs
//
// Interpolation primitives shared by the tween channels.
//
// All curve functions take `t` ∈ [0.0, 1.0] and return a remapped value in
// [0.0, 1.0]. Out-of-range input is clamped so a channel can never overshoot
// its terminal value, no matter how far past its window the clock runs.

use serde::{Deserialize, Serialize};

// ── Clamp / lerp ─────────────────────────────────────────────────────────────

/// Clamp `v` to [0.0, 1.0].
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b` at `t` ∈ [0, 1].
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ── Easing curves ─────────────────────────────────────────────────────────────

/// Ease in — starts slow, accelerates.
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = clamp01(t);
    t * t
}

/// Ease out — decelerates to the end.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = clamp01(t);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Smooth-step cubic ease-in/out.
///
/// Zero derivative at both endpoints → no visible pop at start or end.
///
/// ```
/// use softfade_core::easing::ease_in_out;
/// assert_eq!(ease_in_out(0.0), 0.0);
/// assert_eq!(ease_in_out(1.0), 1.0);
/// assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}

// ── Easing selector ──────────────────────────────────────────────────────────

/// Named easing curve, serializable so a channel table can live in data.
///
/// The stock fade channels all use `Linear` — the effect is gentle enough
/// that the per-signal window offsets do the shaping. The other variants are
/// for hosts that want a snappier fade without rewriting the channel table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Remap `t` ∈ [0.0, 1.0] through this curve. Input is clamped.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear    => clamp01(t),
            Easing::EaseIn    => ease_in(t),
            Easing::EaseOut   => ease_out(t),
            Easing::EaseInOut => ease_in_out(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(1.5), 1.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.8, 1.0, 0.0), 0.8);
        assert_eq!(lerp(0.8, 1.0, 1.0), 1.0);
        assert!((lerp(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn all_curves_hit_endpoints_exactly() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn curves_clamp_out_of_range_input() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?} below range");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?} above range");
        }
    }

    #[test]
    fn ease_in_lags_ease_out_leads() {
        assert!((ease_in(0.5) - 0.25).abs() < 1e-6);
        assert!((ease_out(0.5) - 0.75).abs() < 1e-6);
    }
}
