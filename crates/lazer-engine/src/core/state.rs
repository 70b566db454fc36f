// core/state.rs
//
// The Motion State record — all animation state for one cursor instance.
// Exclusively owned by its MotionEngine; one engine, one state.

use glam::Vec2;

use super::spring::Spring;

/// Rotation spring restoring-force coefficient.
pub const ROTATION_STIFFNESS: f32 = 0.009;
/// Fraction of rotation velocity removed each frame.
pub const ROTATION_DAMPING: f32 = 0.075;
/// Fixed friction forcing rotation to rest at low speed (degrees/frame).
pub const ROTATION_REST_FRICTION: f32 = 0.01;
/// Scale spring restoring-force coefficient.
pub const SCALE_STIFFNESS: f32 = 0.1;
/// Fraction of scale velocity removed each frame. Heavy enough that the
/// scale spring needs no friction term to come to rest.
pub const SCALE_DAMPING: f32 = 0.35;

/// Mutable animation state advanced by the per-frame tick.
#[derive(Debug, Clone)]
pub struct MotionState {
    /// Latest raw pointer position.
    pub target: Vec2,
    /// Smoothed (rendered) position, lagging behind `target`.
    pub follower: Vec2,
    /// Whether a press-drag gesture is active.
    pub is_dragging: bool,
    /// Anchor of the current drag; drifts slowly toward recent motion.
    pub pivot: Vec2,
    /// Most recent pointer position observed while dragging.
    pub last_move: Vec2,
    /// Desired rotation in degrees, unwrapped (accumulates past ±360°).
    pub target_rotation: f32,
    /// Spring-animated rotation, degrees.
    pub rotation: Spring,
    /// Desired scale factor: 1.0 idle, 0.8 while pressed.
    pub target_scale: f32,
    /// Spring-animated scale factor.
    pub scale: Spring,
}

impl MotionState {
    pub fn new() -> Self {
        Self {
            target: Vec2::ZERO,
            follower: Vec2::ZERO,
            is_dragging: false,
            pivot: Vec2::ZERO,
            last_move: Vec2::ZERO,
            target_rotation: 0.0,
            rotation: Spring::new(
                0.0,
                ROTATION_STIFFNESS,
                ROTATION_DAMPING,
                ROTATION_REST_FRICTION,
            ),
            target_scale: 1.0,
            scale: Spring::new(1.0, SCALE_STIFFNESS, SCALE_DAMPING, 0.0),
        }
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}
