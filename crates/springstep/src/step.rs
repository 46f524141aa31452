//! Closed-form scalar spring steps
//!
//! Every function here evaluates the analytic solution of the critically
//! damped spring ODE at `t = dt`, so a single call with a large `dt` lands on
//! exactly the same state as many small calls covering the same interval.
//! There is no accumulated integration error and no per-frame history.

use crate::angle::{approx_eq, wrap_deg};

/// Decay factor for one step: `e^(-spring_factor * dt)`.
pub fn spring_exp(spring_factor_dt: f32) -> f32 {
    (-spring_factor_dt).exp()
}

/// Advance one spring step toward zero.
///
/// Solves the damped spring system in closed form:
///
/// ```text
/// B      = vel + k * pos
/// p(dt)  = (pos + B * dt) * e^(-k * dt)
/// v(dt)  = B * e^(-k * dt) - k * p(dt)
/// ```
///
/// `spring_factor` of zero degenerates to pure velocity integration and
/// `dt` of zero returns the inputs unchanged. A negative `spring_factor`
/// grows exponentially; the caller must not pass one.
pub fn spring_update(pos: f32, vel: f32, spring_factor: f32, dt: f32) -> (f32, f32) {
    let spring_exp = spring_exp(spring_factor * dt);
    let b = vel + spring_factor * pos;
    let pos_dt = (pos + b * dt) * spring_exp;
    let vel_dt = b * spring_exp - spring_factor * pos_dt;
    (pos_dt, vel_dt)
}

/// Advance one spring step toward `target_pos`.
///
/// Springs the difference `pos - target_pos` toward zero and re-adds the
/// target, so the target may jump arbitrarily between calls and the spring
/// chases it from wherever position and velocity currently are.
pub fn spring_lerp(pos: f32, vel: f32, target_pos: f32, spring_factor: f32, dt: f32) -> (f32, f32) {
    let (diff_dt, vel_dt) = spring_update(pos - target_pos, vel, spring_factor, dt);
    (target_pos + diff_dt, vel_dt)
}

/// Advance one spring step toward `target_pos`, in degrees.
///
/// The initial difference is the shortest signed angular distance and the
/// result is wrapped back into `(-180, 180]`, so a target crossing the ±180°
/// seam never sends the spring the long way around.
pub fn spring_lerp_angle_deg(
    pos: f32,
    vel: f32,
    target_pos: f32,
    spring_factor: f32,
    dt: f32,
) -> (f32, f32) {
    let diff = wrap_deg(pos - target_pos);
    let (diff_dt, vel_dt) = spring_update(diff, vel, spring_factor, dt);
    (wrap_deg(target_pos + diff_dt), vel_dt)
}

/// Advance one premultiplied spring step toward zero.
///
/// Identical to [`spring_update`] with the tick as the unit of time: velocity
/// is per tick, `spring_factor_dt` is `spring_factor * dt`, and
/// `spring_exp_dt` must equal [`spring_exp`]`(spring_factor_dt)`. When `dt` is
/// a fixed simulation tick this lets a caller compute the transcendental once
/// and share it across every spring instance updated that tick. The
/// coefficient invariant is checked in debug builds only.
pub fn spring_premult_update(
    pos: f32,
    vel: f32,
    spring_factor_dt: f32,
    spring_exp_dt: f32,
) -> (f32, f32) {
    debug_assert!(approx_eq(spring_exp(spring_factor_dt), spring_exp_dt, 1e-4));
    let b = vel + spring_factor_dt * pos;
    let pos_dt = (pos + b) * spring_exp_dt;
    let vel_dt = b * spring_exp_dt - spring_factor_dt * pos_dt;
    (pos_dt, vel_dt)
}

/// Advance one premultiplied spring step toward `target_pos`.
pub fn spring_premult_lerp(
    pos: f32,
    vel: f32,
    target_pos: f32,
    spring_factor_dt: f32,
    spring_exp_dt: f32,
) -> (f32, f32) {
    let (diff_dt, vel_dt) =
        spring_premult_update(pos - target_pos, vel, spring_factor_dt, spring_exp_dt);
    (target_pos + diff_dt, vel_dt)
}
