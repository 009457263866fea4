//! Spring physics animation
//!
//! RK4-integrated springs. The cursor dot and ring follow the pointer with
//! springs of different stiffness so the ring trails behind the dot.

const PIXEL_REST_DELTA: f32 = 0.5;
const PIXEL_REST_SPEED: f32 = 5.0;

/// Configuration for a spring animation
///
/// `rest_delta` and `rest_speed` decide when the spring counts as settled and
/// snaps onto its target. The defaults suit pixel offsets; unitless values
/// such as a scale need much tighter thresholds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f32,
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f32,
}

fn default_rest_delta() -> f32 {
    PIXEL_REST_DELTA
}

fn default_rest_speed() -> f32 {
    PIXEL_REST_SPEED
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: PIXEL_REST_DELTA,
            rest_speed: PIXEL_REST_SPEED,
        }
    }

    /// Tracks its target within a frame or two (cursor dot)
    pub fn snappy() -> Self {
        Self::new(900.0, 62.0, 1.0)
    }

    /// Critically damped and noticeably slower (cursor ring)
    pub fn trailing() -> Self {
        Self::new(170.0, 27.0, 1.0)
    }

    /// Same spring, settling once within `delta` of the target and slower than `speed`
    pub fn rest(mut self, delta: f32, speed: f32) -> Self {
        self.rest_delta = delta;
        self.rest_speed = speed;
        self
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Step the simulation by `dt` seconds using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let steps = (seconds * 120.0) as usize;
        for _ in 0..steps {
            spring.step(1.0 / 120.0);
        }
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(100.0);
        run(&mut spring, 2.0);

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_trailing_lags_snappy() {
        let mut dot = Spring::new(SpringConfig::snappy(), 0.0);
        let mut ring = Spring::new(SpringConfig::trailing(), 0.0);
        dot.set_target(200.0);
        ring.set_target(200.0);
        run(&mut dot, 0.1);
        run(&mut ring, 0.1);

        assert!(dot.value() > ring.value());
    }

    #[test]
    fn test_presets_do_not_oscillate() {
        for config in [SpringConfig::snappy(), SpringConfig::trailing()] {
            let mut spring = Spring::new(config, 0.0);
            spring.set_target(100.0);
            for _ in 0..240 {
                spring.step(1.0 / 120.0);
                assert!(spring.value() <= 100.0 + 0.5);
            }
        }
    }

    #[test]
    fn test_tight_rest_eases_small_ranges() {
        let mut loose = Spring::new(SpringConfig::trailing(), 1.0);
        let mut tight = Spring::new(SpringConfig::trailing().rest(0.001, 0.01), 1.0);
        loose.set_target(1.5);
        tight.set_target(1.5);
        loose.step(1.0 / 120.0);
        tight.step(1.0 / 120.0);
        loose.step(1.0 / 120.0);
        tight.step(1.0 / 120.0);

        // Pixel thresholds treat half a unit as already there
        assert_eq!(loose.value(), 1.5);
        assert!(tight.value() > 1.0 && tight.value() < 1.1);

        run(&mut tight, 2.0);
        assert!(tight.is_settled());
        assert_eq!(tight.value(), 1.5);
    }
}
