// api/mod.rs

pub mod engine;
pub mod options;

pub use engine::MotionEngine;
pub use options::EngineOptions;
