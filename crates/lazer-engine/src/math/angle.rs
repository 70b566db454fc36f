// math/angle.rs
//
// Angle helpers for drag-rotation targeting. Degrees throughout; the
// accumulated rotation is unwrapped (unbounded), only differences wrap.

/// Tilt bias added to every drag heading, in degrees.
pub const TILT_BIAS_DEG: f32 = 24.3;

/// Wrap an angular difference into (-180, 180] degrees.
///
/// Retargeting adds the wrapped difference to the current rotation, so the
/// cursor always takes the shorter turn while its rotation keeps
/// accumulating continuously past ±360°.
pub fn wrap_shortest(diff_deg: f32) -> f32 {
    let mut d = diff_deg % 360.0;
    if d <= -180.0 {
        d += 360.0;
    } else if d > 180.0 {
        d -= 360.0;
    }
    d
}

/// Heading of the drag vector `(dx, dy)` in degrees, tilt bias included.
///
/// Axis convention matches the cursor artwork: a straight-down drag
/// (dx = 0, dy > 0) reads as 0° before the bias.
pub fn drag_heading(dx: f32, dy: f32) -> f32 {
    (-dx).atan2(dy).to_degrees() + TILT_BIAS_DEG
}
