// output/transform.rs
//
// Per-frame output of the motion engine: the visual transform the render
// sink applies. How it gets painted is the bridge's business.

/// Transform triple produced by one engine step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTransform {
    /// Horizontal translation in px.
    pub x: f32,
    /// Vertical translation in px.
    pub y: f32,
    /// Rotation in degrees (unwrapped).
    pub rotation: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl CursorTransform {
    /// CSS value for `style.transform`: translate, then rotate, then scale.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
            self.x, self.y, self.rotation, self.scale
        )
    }
}
