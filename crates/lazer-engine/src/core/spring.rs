// core/spring.rs
//
// Velocity-based spring integrator: proportional restoring force and
// multiplicative damping, with an optional fixed friction term at low
// speed so the value comes to rest instead of creeping asymptotically.

/// Speed below which rest friction applies.
const REST_SPEED: f32 = 1.0;

/// One spring-animated scalar.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    /// Current value.
    pub value: f32,
    /// Current velocity, in value units per frame.
    pub velocity: f32,
    /// Restoring-force coefficient.
    pub stiffness: f32,
    /// Fraction of velocity removed each frame (0..1).
    pub damping: f32,
    /// Fixed friction subtracted while 0 < |velocity| < 1; 0 disables.
    pub rest_friction: f32,
}

impl Spring {
    pub fn new(value: f32, stiffness: f32, damping: f32, rest_friction: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            stiffness,
            damping,
            rest_friction,
        }
    }

    /// Advance one frame toward `target`.
    ///
    /// The friction term can overshoot zero and flip the velocity sign
    /// within a single frame; that matches the shipped cursor feel and is
    /// kept as-is. The zero-velocity guard matters: friction must vanish at
    /// exactly zero rather than push the spring off rest.
    pub fn step(&mut self, target: f32) {
        self.velocity += (target - self.value) * self.stiffness;
        self.velocity *= 1.0 - self.damping;
        if self.rest_friction > 0.0 && self.velocity != 0.0 && self.velocity.abs() < REST_SPEED {
            self.velocity -= self.rest_friction * self.velocity.signum();
        }
        self.value += self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frictionless_spring_settles_exactly() {
        let mut spring = Spring::new(0.8, 0.1, 0.35, 0.0);
        for _ in 0..500 {
            spring.step(1.0);
        }
        assert!((spring.value - 1.0).abs() < 1e-4, "value was {}", spring.value);
        assert!(spring.velocity.abs() < 1e-4);
    }

    #[test]
    fn friction_spring_reaches_low_speed_rest() {
        let mut spring = Spring::new(24.3, 0.009, 0.075, 0.01);
        for _ in 0..2000 {
            spring.step(0.0);
        }
        // Friction keeps it buzzing below the rest threshold rather than
        // oscillating at full amplitude forever.
        assert!(spring.velocity.abs() < 0.01, "velocity was {}", spring.velocity);
        assert!(spring.value.abs() < 2.0, "value was {}", spring.value);
    }

    #[test]
    fn friction_skips_exact_zero_velocity() {
        let mut spring = Spring::new(5.0, 0.009, 0.075, 0.01);
        spring.step(5.0);
        // At rest on target: no force, no friction kick.
        assert_eq!(spring.velocity, 0.0);
        assert_eq!(spring.value, 5.0);
    }

    #[test]
    fn friction_waits_for_low_speed() {
        let mut spring = Spring::new(0.0, 0.009, 0.075, 0.01);
        spring.velocity = 3.0;
        spring.step(0.0);
        // Above REST_SPEED only damping applies.
        assert!((spring.velocity - 3.0 * 0.925).abs() < 1e-5);
    }
}
