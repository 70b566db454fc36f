// output/mod.rs

pub mod transform;

pub use transform::CursorTransform;
