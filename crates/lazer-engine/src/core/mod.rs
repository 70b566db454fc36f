// core/mod.rs
//
// Frame timing, spring integration, and the Motion State record.

pub mod clock;
pub mod spring;
pub mod state;

pub use clock::FrameClock;
pub use spring::Spring;
pub use state::MotionState;
