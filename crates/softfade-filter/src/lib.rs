// crates/softfade-filter/src/lib.rs
//
// Pixel-application layer for softfade. No widget or math types of its own —
// it takes a ColorMatrix (or a sampled FadeFrame) from softfade-core and
// runs packed RGBA8 buffers through it.

pub mod apply;
pub mod preview;

// Re-export the main public API so host imports are simple.
pub use apply::{apply_frame, apply_matrix};
pub use preview::render_preview;
