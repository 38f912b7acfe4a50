use std::time::Duration;

const MAX_STEP: f32 = 1.0 / 120.0;
const REST_DISTANCE: f32 = 0.01;
const REST_VELOCITY: f32 = 0.01;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

/// A damped spring pulling `value` towards `target`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(value: f32) -> Self {
        return Self {
            value,
            velocity: 0.0,
            target: value,
        };
    }

    pub fn value(&self) -> f32 {
        return self.value;
    }

    pub fn target(&self) -> f32 {
        return self.target;
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` with no motion.
    pub fn reset(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        return (self.value - self.target).abs() < REST_DISTANCE
            && self.velocity.abs() < REST_VELOCITY;
    }

    /// Advance by `elapsed` using semi implicit Euler in steps of at most 1/120 s. Returns true
    /// while the spring is still moving.
    pub fn step(&mut self, elapsed: Duration, params: &SpringParams) -> bool {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        let mass = params.mass.max(f32::EPSILON);
        let mut remaining = elapsed.as_secs_f32();

        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP);
            let force =
                -params.stiffness * (self.value - self.target) - params.damping * self.velocity;

            self.velocity += force / mass * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }

        return true;
    }
}

#[cfg(test)]
mod tests {
    use super::{Spring, SpringParams};
    use std::time::Duration;

    fn critical() -> SpringParams {
        return SpringParams {
            stiffness: 350.0,
            damping: 2.0 * (350.0f32 * 0.5).sqrt(),
            mass: 0.5,
        };
    }

    #[test]
    fn settles_on_target_without_overshoot() {
        let mut spring = Spring::new(5.0);
        spring.set_target(8.0);

        let mut peak: f32 = 0.0;

        for _ in 0..120 {
            spring.step(Duration::from_millis(16), &critical());
            peak = peak.max(spring.value());
        }

        assert_eq!(spring.value(), 8.0);
        assert!(spring.is_settled());
        assert!(peak <= 8.0 + 0.01);
    }

    #[test]
    fn long_frames_are_substepped() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);

        // A single huge step must not explode.
        spring.step(Duration::from_secs(2), &critical());
        assert!((spring.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn settled_spring_reports_rest() {
        let mut spring = Spring::new(3.0);

        assert!(!spring.step(Duration::from_millis(16), &critical()));
        spring.reset(4.0);
        assert_eq!(spring.value(), 4.0);
        assert_eq!(spring.target(), 4.0);
    }
}
