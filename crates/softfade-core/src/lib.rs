// crates/softfade-core/src/lib.rs
//
// Pure fade math and plain data — no I/O, no pixel buffers, no clock beyond
// std::time. Consumed by softfade-filter and by whatever render loop hosts
// the image widget.
//
// To add another animated signal to the fade:
//   1. Add a `Channel` constant in channel.rs
//   2. Add a field to `FadeFrame` and sample it in `FadeTransition::sample_at`
//   3. Fold it into the matrix in `FadeFrame::apply_to`

pub mod channel;
pub mod easing;
pub mod loading;
pub mod matrix;
pub mod transition;

// Re-export the main public API so downstream imports are simple.
pub use loading::{DataSource, FadeOptions, ImageFade, ImageLoadState};
pub use matrix::ColorMatrix;
pub use transition::{FadeFrame, FadeTransition, KeyedFade, TransitionState};
