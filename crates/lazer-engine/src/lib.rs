pub mod api;
pub mod core;
pub mod input;
pub mod math;
pub mod output;

// Re-export key types at crate root for convenience
pub use api::engine::MotionEngine;
pub use api::options::EngineOptions;
pub use core::clock::FrameClock;
pub use core::spring::Spring;
pub use core::state::MotionState;
pub use input::queue::{InputQueue, PointerEvent};
pub use output::transform::CursorTransform;
