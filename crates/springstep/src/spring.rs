//! Stateful spring wrappers
//!
//! Thin value-semantics types holding `{position, velocity, target}` that
//! delegate each step to the free functions in [`crate::step`] and
//! [`crate::value`]. Every operation is total; there are no fallible paths.

use crate::angle::wrap_deg;
use crate::step::{spring_lerp, spring_lerp_angle_deg, spring_premult_lerp};
use crate::value::{spring_vec_lerp, SpringValue};

/// Stiffness presets for the single-factor spring model.
pub mod stiffness {
    /// Slow, soft follow.
    pub const GENTLE: f32 = 4.0;
    /// General-purpose UI follow.
    pub const DEFAULT: f32 = 10.0;
    /// Fast snap with little visible lag.
    pub const SNAPPY: f32 = 24.0;
}

/// Rest threshold for the settling predicates.
const SETTLE_EPSILON: f32 = 1e-3;

/// A scalar spring chasing a movable target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spring {
    pos: f32,
    vel: f32,
    target: f32,
}

impl Spring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at rest on `value`, with the target there too.
    pub fn with_value(value: f32) -> Self {
        Self {
            pos: value,
            vel: 0.0,
            target: value,
        }
    }

    /// Zero position, velocity, and target.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move the target; position and velocity are untouched and the spring
    /// chases the new target on the next update.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance one step of `dt` seconds.
    pub fn update(&mut self, spring_factor: f32, dt: f32) {
        let (pos, vel) = spring_lerp(self.pos, self.vel, self.target, spring_factor, dt);
        self.pos = pos;
        self.vel = vel;
    }

    /// Snap position and target to `pos` and drop all velocity, eliminating
    /// spring lag on teleport-like events.
    pub fn force_pos(&mut self, pos: f32) {
        self.pos = pos;
        self.vel = 0.0;
        self.target = pos;
    }

    pub fn value(&self) -> f32 {
        self.pos
    }

    pub fn velocity(&self) -> f32 {
        self.vel
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Position within the rest threshold of the target and velocity below it.
    pub fn is_settled(&self) -> bool {
        (self.pos - self.target).abs() < SETTLE_EPSILON && self.vel.abs() < SETTLE_EPSILON
    }
}

/// A spring over degrees that always takes the shortest angular path.
///
/// Position is renormalized into `(-180, 180]` after every update, so a target
/// crossing the ±180° seam never sends the spring the long way around.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleSpring {
    pos: f32,
    vel: f32,
    target: f32,
}

impl AngleSpring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: f32) -> Self {
        Self {
            pos: value,
            vel: 0.0,
            target: value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn update(&mut self, spring_factor: f32, dt: f32) {
        let (pos, vel) = spring_lerp_angle_deg(self.pos, self.vel, self.target, spring_factor, dt);
        self.pos = pos;
        self.vel = vel;
    }

    pub fn force_pos(&mut self, pos: f32) {
        self.pos = pos;
        self.vel = 0.0;
        self.target = pos;
    }

    pub fn value(&self) -> f32 {
        self.pos
    }

    pub fn velocity(&self) -> f32 {
        self.vel
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        wrap_deg(self.pos - self.target).abs() < SETTLE_EPSILON && self.vel.abs() < SETTLE_EPSILON
    }
}

/// A scalar spring updated with premultiplied coefficients.
///
/// For fixed-tick callers: time is measured in ticks, so velocity is per tick
/// and the update takes `spring_factor * dt` together with its precomputed
/// decay factor, letting one `exp` serve every spring updated that tick. The
/// coefficient pair is debug-asserted to match; see
/// [`crate::step::spring_premult_update`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PremultSpring {
    pos: f32,
    vel: f32,
    target: f32,
}

impl PremultSpring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: f32) -> Self {
        Self {
            pos: value,
            vel: 0.0,
            target: value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance one tick. `spring_exp_dt` must equal
    /// [`crate::step::spring_exp`]`(spring_factor_dt)`.
    pub fn update(&mut self, spring_factor_dt: f32, spring_exp_dt: f32) {
        let (pos, vel) = spring_premult_lerp(
            self.pos,
            self.vel,
            self.target,
            spring_factor_dt,
            spring_exp_dt,
        );
        self.pos = pos;
        self.vel = vel;
    }

    pub fn force_pos(&mut self, pos: f32) {
        self.pos = pos;
        self.vel = 0.0;
        self.target = pos;
    }

    pub fn value(&self) -> f32 {
        self.pos
    }

    /// Velocity in units per tick.
    pub fn velocity(&self) -> f32 {
        self.vel
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        (self.pos - self.target).abs() < SETTLE_EPSILON && self.vel.abs() < SETTLE_EPSILON
    }
}

/// A spring over any [`SpringValue`]: 2D/3D/4D vectors, colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct VecSpring<T: SpringValue> {
    pos: T,
    vel: T,
    target: T,
}

impl<T: SpringValue> VecSpring<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: T) -> Self {
        Self {
            pos: value,
            vel: T::default(),
            target: value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    pub fn update(&mut self, spring_factor: f32, dt: f32) {
        let (pos, vel) = spring_vec_lerp(self.pos, self.vel, self.target, spring_factor, dt);
        self.pos = pos;
        self.vel = vel;
    }

    pub fn force_pos(&mut self, pos: T) {
        self.pos = pos;
        self.vel = T::default();
        self.target = pos;
    }

    pub fn value(&self) -> T {
        self.pos
    }

    pub fn velocity(&self) -> T {
        self.vel
    }

    pub fn target(&self) -> T {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::spring_exp;
    use glam::Vec2;

    #[test]
    fn test_reset_zeroes_everything() {
        let mut spring = Spring::with_value(42.0);
        spring.set_target(7.0);
        spring.update(10.0, 0.016);
        spring.reset();
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn test_set_target_leaves_state_untouched() {
        let mut spring = Spring::with_value(5.0);
        spring.set_target(50.0);
        assert_eq!(spring.value(), 5.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 50.0);
    }

    #[test]
    fn test_spring_chases_target() {
        let mut spring = Spring::new();
        spring.set_target(100.0);
        for _ in 0..1000 {
            spring.update(stiffness::DEFAULT, 0.016);
        }
        assert!((spring.value() - 100.0).abs() < 0.01);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_force_pos_snaps_and_kills_velocity() {
        let mut spring = Spring::new();
        spring.set_target(100.0);
        for _ in 0..10 {
            spring.update(10.0, 0.016);
        }
        assert!(spring.velocity() != 0.0);

        spring.force_pos(25.0);
        assert_eq!(spring.value(), 25.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 25.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_angle_spring_crosses_seam_forward() {
        let mut spring = AngleSpring::with_value(179.0);
        spring.set_target(-179.0);
        spring.update(10.0, 0.016);
        let pos = spring.value();
        assert!(pos > 179.0 || pos <= -179.0, "went the long way: {pos}");

        for _ in 0..1000 {
            spring.update(10.0, 0.016);
        }
        assert!(wrap_deg(spring.value() - (-179.0)).abs() < 0.01);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_angle_spring_force_pos() {
        let mut spring = AngleSpring::new();
        spring.force_pos(90.0);
        assert_eq!(spring.value(), 90.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 90.0);
    }

    #[test]
    fn test_premult_spring_matches_plain_spring_at_unit_tick() {
        let k = 3.0;
        let mut plain = Spring::with_value(10.0);
        plain.set_target(-5.0);
        let mut premult = PremultSpring::with_value(10.0);
        premult.set_target(-5.0);

        for _ in 0..50 {
            plain.update(k, 1.0);
            premult.update(k, spring_exp(k));
            assert!((plain.value() - premult.value()).abs() < 1e-4);
            assert!((plain.velocity() - premult.velocity()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_premult_spring_full_surface() {
        let mut spring = PremultSpring::new();
        spring.set_target(1.0);
        let kd = 10.0 * 0.016;
        let exp = spring_exp(kd);
        for _ in 0..2000 {
            spring.update(kd, exp);
        }
        assert!((spring.value() - 1.0).abs() < 0.01);

        spring.force_pos(0.5);
        assert_eq!(spring.value(), 0.5);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.target(), 0.5);

        spring.reset();
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn test_vec_spring_chases_target() {
        let mut spring = VecSpring::<Vec2>::new();
        spring.set_target(Vec2::new(3.0, -8.0));
        for _ in 0..1000 {
            spring.update(10.0, 0.016);
        }
        assert!((spring.value() - Vec2::new(3.0, -8.0)).length() < 0.01);
    }

    #[test]
    fn test_vec_spring_force_pos() {
        let mut spring = VecSpring::<Vec2>::new();
        spring.set_target(Vec2::new(10.0, 10.0));
        spring.update(10.0, 0.016);

        spring.force_pos(Vec2::new(1.0, 2.0));
        assert_eq!(spring.value(), Vec2::new(1.0, 2.0));
        assert_eq!(spring.velocity(), Vec2::ZERO);
        assert_eq!(spring.target(), Vec2::new(1.0, 2.0));
    }
}
