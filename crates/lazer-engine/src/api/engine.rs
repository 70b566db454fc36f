// api/engine.rs
//
// The motion engine: applies pointer events to the Motion State and
// integrates one frame at a time. Pure — no DOM, no scheduling. The host
// feeds it events and elapsed time; it hands back the transform to paint.

use glam::Vec2;

use crate::api::options::EngineOptions;
use crate::core::state::MotionState;
use crate::input::queue::PointerEvent;
use crate::math::angle::{drag_heading, wrap_shortest};
use crate::output::transform::CursorTransform;

/// Scale targeted while a press-drag is active.
const PRESSED_SCALE: f32 = 0.8;
/// Scale targeted when idle.
const IDLE_SCALE: f32 = 1.0;
/// Drag distance beyond which rotation retargets toward the drag heading.
const ROTATE_DISTANCE: f32 = 80.0;
/// Drag distance beyond which the pivot drifts toward recent motion.
/// Below ROTATE_DISTANCE: drift can run without retargeting rotation, so
/// jitter near the pivot doesn't constantly swing the rotation target.
const DRIFT_DISTANCE: f32 = 60.0;
/// Fraction of the pivot→last_move offset the pivot recovers per frame.
const DRIFT_RATE: f32 = 0.04;

/// One cursor's motion engine. One engine, one state; instances share
/// nothing.
pub struct MotionEngine {
    pub state: MotionState,
    opts: EngineOptions,
}

impl MotionEngine {
    pub fn new(opts: EngineOptions) -> Self {
        Self {
            state: MotionState::new(),
            opts,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.opts
    }

    /// Whether the pressed visual marker should currently be shown.
    pub fn is_pressed(&self) -> bool {
        self.state.is_dragging
    }

    /// Apply one pointer event to the state.
    pub fn apply(&mut self, event: PointerEvent) {
        let s = &mut self.state;
        match event {
            PointerEvent::Move { x, y } => {
                s.target = Vec2::new(x, y);
                if s.is_dragging {
                    s.last_move = s.target;
                }
            }
            PointerEvent::Down { x, y } => {
                let down = Vec2::new(x, y);
                s.is_dragging = true;
                s.pivot = down;
                s.last_move = down;
                s.target_scale = PRESSED_SCALE;
            }
            PointerEvent::Up => {
                s.is_dragging = false;
                s.target_scale = IDLE_SCALE;
                s.target_rotation = 0.0;
            }
        }
    }

    /// Advance one frame by `dt_ms` and return the transform to paint.
    pub fn step(&mut self, dt_ms: f32) -> CursorTransform {
        let s = &mut self.state;

        // Exact exponential decay toward the target, frame-rate independent.
        let k = if self.opts.use_damping {
            1.0 - (-dt_ms / self.opts.follower_tau).exp()
        } else {
            1.0
        };
        s.follower += (s.target - s.follower) * k;

        if s.is_dragging {
            let distance = s.pivot.distance(s.last_move);
            if distance > ROTATE_DISTANCE {
                let offset = s.last_move - s.pivot;
                let heading = drag_heading(offset.x, offset.y);
                // Shortest turn toward the heading; the target itself stays
                // unwrapped so rotation accumulates past ±360°.
                s.target_rotation = s.rotation.value + wrap_shortest(heading - s.rotation.value);
            }
            if distance > DRIFT_DISTANCE {
                s.pivot += (s.last_move - s.pivot) * DRIFT_RATE;
            }
        }

        s.rotation.step(s.target_rotation);
        s.scale.step(s.target_scale);

        CursorTransform {
            x: s.follower.x,
            y: s.follower.y,
            rotation: s.rotation.value,
            scale: s.scale.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn engine() -> MotionEngine {
        MotionEngine::new(EngineOptions::default())
    }

    #[test]
    fn one_tau_step_covers_63_percent() {
        let mut e = engine();
        e.apply(PointerEvent::Move { x: 100.0, y: 100.0 });
        let t = e.step(160.0);
        let expected = 100.0 * (1.0 - (-1.0f32).exp());
        assert!((t.x - expected).abs() < 0.01, "x was {}", t.x);
        assert!((t.y - expected).abs() < 0.01, "y was {}", t.y);
    }

    #[test]
    fn follower_converges_to_last_target() {
        let mut e = engine();
        e.apply(PointerEvent::Move { x: 640.0, y: -240.0 });
        for _ in 0..600 {
            e.step(16.0);
        }
        assert!((e.state.follower.x - 640.0).abs() < EPS);
        assert!((e.state.follower.y + 240.0).abs() < EPS);
    }

    #[test]
    fn follower_never_overshoots() {
        let mut e = engine();
        e.apply(PointerEvent::Move { x: 200.0, y: 0.0 });
        let mut prev_gap = 200.0;
        for _ in 0..50 {
            let t = e.step(33.0);
            let gap = 200.0 - t.x;
            assert!(gap >= 0.0, "overshot to {}", t.x);
            assert!(gap <= prev_gap, "gap grew from {} to {}", prev_gap, gap);
            prev_gap = gap;
        }
    }

    #[test]
    fn damping_off_snaps_in_one_tick() {
        let mut e = MotionEngine::new(EngineOptions {
            use_damping: false,
            ..Default::default()
        });
        e.apply(PointerEvent::Move { x: 33.0, y: 77.0 });
        let t = e.step(0.5);
        assert_eq!(t.x, 33.0);
        assert_eq!(t.y, 77.0);
    }

    #[test]
    fn drag_start_and_end_set_targets() {
        let mut e = engine();
        e.apply(PointerEvent::Down { x: 10.0, y: 10.0 });
        assert!(e.is_pressed());
        assert_eq!(e.state.target_scale, 0.8);
        assert_eq!(e.state.pivot, Vec2::new(10.0, 10.0));
        assert_eq!(e.state.last_move, Vec2::new(10.0, 10.0));

        e.apply(PointerEvent::Up);
        assert!(!e.is_pressed());
        assert_eq!(e.state.target_scale, 1.0);
        assert_eq!(e.state.target_rotation, 0.0);
    }

    #[test]
    fn moves_outside_a_drag_leave_last_move_alone() {
        let mut e = engine();
        e.apply(PointerEvent::Move { x: 50.0, y: 60.0 });
        assert_eq!(e.state.target, Vec2::new(50.0, 60.0));
        assert_eq!(e.state.last_move, Vec2::ZERO);
    }

    #[test]
    fn long_drag_retargets_rotation() {
        let mut e = engine();
        e.apply(PointerEvent::Down { x: 0.0, y: 0.0 });
        e.apply(PointerEvent::Move { x: 0.0, y: 100.0 });
        e.step(16.0);
        // Straight-down drag: heading is the bare tilt bias.
        assert!((e.state.target_rotation - 24.3).abs() < EPS);
    }

    #[test]
    fn retarget_takes_shortest_turn_from_unwrapped_rotation() {
        let mut e = engine();
        e.state.rotation.value = 350.0;
        e.apply(PointerEvent::Down { x: 0.0, y: 0.0 });
        e.apply(PointerEvent::Move { x: 0.0, y: 100.0 });
        e.step(16.0);
        // Heading is 24.3°; from 350° the short way is +34.3°, not -325.7°.
        assert!(
            (e.state.target_rotation - 384.3).abs() < EPS,
            "target_rotation was {}",
            e.state.target_rotation
        );
    }

    #[test]
    fn mid_drag_drifts_pivot_without_retargeting() {
        let mut e = engine();
        e.apply(PointerEvent::Down { x: 0.0, y: 0.0 });
        e.apply(PointerEvent::Move { x: 0.0, y: 70.0 });
        e.step(16.0);
        // Distance 70 sits between the drift and rotate thresholds.
        assert!((e.state.pivot.y - 2.8).abs() < EPS, "pivot.y was {}", e.state.pivot.y);
        assert_eq!(e.state.pivot.x, 0.0);
        assert_eq!(e.state.target_rotation, 0.0);
    }

    #[test]
    fn short_drag_holds_the_pivot() {
        let mut e = engine();
        e.apply(PointerEvent::Down { x: 0.0, y: 0.0 });
        e.apply(PointerEvent::Move { x: 0.0, y: 50.0 });
        e.step(16.0);
        assert_eq!(e.state.pivot, Vec2::ZERO);
        assert_eq!(e.state.target_rotation, 0.0);
    }

    #[test]
    fn settles_after_drag_ends() {
        let mut e = engine();
        e.apply(PointerEvent::Down { x: 0.0, y: 0.0 });
        e.apply(PointerEvent::Move { x: 0.0, y: 100.0 });
        for _ in 0..30 {
            e.step(16.0);
        }
        e.apply(PointerEvent::Up);
        let mut rotation_rested = false;
        for _ in 0..2000 {
            e.step(16.0);
            if e.state.rotation.velocity.abs() < 0.01 {
                rotation_rested = true;
            }
        }
        assert!(rotation_rested, "rotation never reached rest");
        assert!((e.state.scale.value - 1.0).abs() < EPS, "scale was {}", e.state.scale.value);
        assert!(e.state.scale.velocity.abs() < EPS);
    }

    #[test]
    fn pressed_marker_flips_only_on_gesture_events() {
        let mut e = engine();
        assert!(!e.is_pressed());
        e.apply(PointerEvent::Down { x: 5.0, y: 5.0 });
        assert!(e.is_pressed());
        for _ in 0..10 {
            e.step(16.0);
            assert!(e.is_pressed(), "step flipped the pressed marker");
        }
        e.apply(PointerEvent::Up);
        assert!(!e.is_pressed());
        for _ in 0..10 {
            e.step(16.0);
            assert!(!e.is_pressed(), "step flipped the pressed marker");
        }
    }

    #[test]
    fn pressed_scale_settles_near_point_eight() {
        let mut e = engine();
        e.apply(PointerEvent::Down { x: 0.0, y: 0.0 });
        for _ in 0..500 {
            e.step(16.0);
        }
        assert!((e.state.scale.value - 0.8).abs() < EPS);
    }
}
