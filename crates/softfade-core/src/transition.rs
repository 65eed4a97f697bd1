// crates/softfade-core/src/transition.rs
//
// The fade transition driver.
//
// A `FadeTransition` is a single one-shot Empty → Loaded run over a fixed
// total duration. It never reverses and never restarts on its own; the only
// way to start over is to replace it (see `KeyedFade`), which is also the
// implicit cancellation path.
//
// The driver is frame-driven: the host render loop calls `frame()` once per
// tick and feeds the resulting `FadeFrame` scalars into a `ColorMatrix`.
// `sample_at()` is the pure core — it takes an explicit elapsed time, which
// is what the tests exercise.

use std::time::{Duration, Instant};

use crate::channel::{ALPHA, BRIGHTNESS, SATURATION};

/// Progress state of a fade run. One-shot: Empty → Loaded, never back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    Empty,
    Loaded,
}

/// One render tick's worth of fade signals.
///
/// Recomputed every tick; carries no identity across frames beyond letting
/// the caller detect completion via `is_finished`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeFrame {
    /// Opacity in [0, 1].
    pub alpha:       f32,
    /// Brightness in [0.8, 1.0]; 1.0 = neutral.
    pub brightness:  f32,
    /// Saturation in [0, 1]; 0 = grayscale, 1 = original color.
    pub saturation:  f32,
    /// True iff the run has settled at `Loaded`. Derived from elapsed time,
    /// never set independently.
    pub is_finished: bool,
}

/// A single Empty → Loaded fade over a fixed total duration.
#[derive(Clone, Copy, Debug)]
pub struct FadeTransition {
    total: Duration,
    start: Instant,
}

impl FadeTransition {
    /// Start a fresh run now. A zero `total` snaps straight to the terminal
    /// values — the first sample already reports `is_finished`.
    ///
    /// Negative durations are unrepresentable: the API takes
    /// `std::time::Duration`.
    pub fn new(total: Duration) -> Self {
        Self { total, start: Instant::now() }
    }

    /// Convenience for callers that deal in whole milliseconds.
    pub fn from_millis(total_ms: u64) -> Self {
        Self::new(Duration::from_millis(total_ms))
    }

    /// Total duration of the run, as passed to the constructor.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Evaluate the fade at an explicit elapsed time.
    ///
    /// Pure with respect to the wall clock — `frame()` is this plus
    /// `self.start.elapsed()`.
    ///
    /// ```
    /// use std::time::Duration;
    /// use softfade_core::transition::FadeTransition;
    ///
    /// let fade = FadeTransition::from_millis(1000);
    /// let f = fade.sample_at(Duration::ZERO);
    /// assert_eq!((f.alpha, f.saturation), (0.0, 0.0));
    /// assert!(!f.is_finished);
    /// ```
    pub fn sample_at(&self, elapsed: Duration) -> FadeFrame {
        let overall = if self.total.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.total.as_secs_f32()).min(1.0)
        };

        FadeFrame {
            alpha:       ALPHA.sample(overall),
            brightness:  BRIGHTNESS.sample(overall),
            saturation:  SATURATION.sample(overall),
            is_finished: elapsed >= self.total,
        }
    }

    /// Evaluate the fade at the current wall-clock time. Call once per
    /// render tick.
    pub fn frame(&self) -> FadeFrame {
        self.sample_at(self.start.elapsed())
    }

    /// Current progress state, derived from elapsed time.
    pub fn state(&self) -> TransitionState {
        if self.start.elapsed() >= self.total {
            TransitionState::Loaded
        } else {
            TransitionState::Empty
        }
    }
}

// ── Keyed construct-or-fetch ──────────────────────────────────────────────────

/// Single-slot holder that keeps a fade alive across render ticks, keyed by
/// a caller-supplied identity token.
///
/// Fetching with the key already in the slot returns the in-progress (or
/// completed) run untouched — the fade never restarts from zero mid-flight.
/// Fetching with a different key discards the prior run and starts fresh.
///
/// One holder per image slot; it is not a cache of all keys ever seen.
#[derive(Clone, Debug, Default)]
pub struct KeyedFade<K> {
    slot: Option<(K, FadeTransition)>,
}

impl<K: PartialEq> KeyedFade<K> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the run for `key`, starting a fresh one (with `total` as its
    /// duration) if the slot is empty or holds a different key.
    ///
    /// `total` is only consulted when a fresh run starts — re-fetching an
    /// existing key with a different duration does not alter the run.
    pub fn fetch_or_start(&mut self, key: K, total: Duration) -> &FadeTransition {
        let stale = !matches!(&self.slot, Some((k, _)) if *k == key);
        if stale {
            self.slot = None;
        }
        let (_, fade) = self
            .slot
            .get_or_insert_with(|| (key, FadeTransition::new(total)));
        fade
    }

    /// Drop whatever run the slot holds, if any.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn fade_1s() -> FadeTransition {
        FadeTransition::from_millis(1000)
    }

    #[test]
    fn at_zero_elapsed_all_signals_at_start_values() {
        let f = fade_1s().sample_at(Duration::ZERO);
        assert_eq!(f.alpha, 0.0);
        assert!((f.brightness - 0.8).abs() < EPSILON);
        assert_eq!(f.saturation, 0.0);
        assert!(!f.is_finished);
    }

    #[test]
    fn at_half_duration_alpha_terminal_others_mid_tween() {
        let f = fade_1s().sample_at(Duration::from_millis(500));
        assert_eq!(f.alpha, 1.0);
        assert!(f.brightness < 1.0, "brightness still interpolating: {}", f.brightness);
        assert!(f.saturation < 1.0, "saturation still interpolating: {}", f.saturation);
        assert!(!f.is_finished);
    }

    #[test]
    fn at_full_duration_everything_terminal_and_finished() {
        for ms in [1000, 1001, 5000] {
            let f = fade_1s().sample_at(Duration::from_millis(ms));
            assert_eq!((f.alpha, f.brightness, f.saturation), (1.0, 1.0, 1.0));
            assert!(f.is_finished);
        }
    }

    #[test]
    fn signals_never_overshoot() {
        let fade = fade_1s();
        for ms in (0..=2000).step_by(50) {
            let f = fade.sample_at(Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&f.alpha));
            assert!((0.8..=1.0).contains(&f.brightness));
            assert!((0.0..=1.0).contains(&f.saturation));
        }
    }

    #[test]
    fn zero_duration_snaps_and_finishes_on_first_sample() {
        let f = FadeTransition::new(Duration::ZERO).sample_at(Duration::ZERO);
        assert_eq!((f.alpha, f.brightness, f.saturation), (1.0, 1.0, 1.0));
        assert!(f.is_finished);
    }

    #[test]
    fn zero_duration_reports_loaded_immediately() {
        let fade = FadeTransition::new(Duration::ZERO);
        assert_eq!(fade.state(), TransitionState::Loaded);
    }

    #[test]
    fn same_key_does_not_restart_the_run() {
        let mut keyed = KeyedFade::new();
        let first_total = keyed.fetch_or_start("img-a", Duration::from_millis(800)).total();
        // Re-fetch with the same key but a different duration — the original
        // run must survive untouched.
        let total = keyed.fetch_or_start("img-a", Duration::from_millis(50)).total();
        assert_eq!(first_total, total);
        assert_eq!(total, Duration::from_millis(800));
    }

    #[test]
    fn different_key_discards_prior_progress() {
        let mut keyed = KeyedFade::new();
        keyed.fetch_or_start("img-a", Duration::from_millis(800));
        let total = keyed.fetch_or_start("img-b", Duration::from_millis(300)).total();
        assert_eq!(total, Duration::from_millis(300));
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut keyed = KeyedFade::new();
        keyed.fetch_or_start(7_u64, Duration::from_millis(100));
        keyed.clear();
        // After clear, even the same key starts a fresh run with the new duration.
        let total = keyed.fetch_or_start(7_u64, Duration::from_millis(900)).total();
        assert_eq!(total, Duration::from_millis(900));
    }
}
