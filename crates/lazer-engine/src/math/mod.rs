// math/mod.rs
//
// Pure math helpers — no dependency on engine state.

pub mod angle;

pub use angle::{drag_heading, wrap_shortest, TILT_BIAS_DEG};
