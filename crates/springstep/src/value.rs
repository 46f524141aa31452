//! Generic spring steps over vector-like values
//!
//! The same closed-form step as [`crate::step`], written once for any value
//! type with addition, subtraction, and scalar multiplication. The decay
//! factor stays scalar; only position, velocity, and target are generic.
//! There is no angle-wrapped generic form, wrapping is scalar-only.

use std::ops::{Add, Mul, Sub};

use crate::step::spring_exp;

/// A value a spring can animate: scalars, 2D/3D/4D vectors, colors.
///
/// Blanket-implemented for every `Copy + Default` type with `+`, `-`, and
/// `* f32`, so `f32` and e.g. `glam::Vec2`/`Vec3` qualify with no
/// registration.
pub trait SpringValue:
    Copy + Default + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
}

impl<T> SpringValue for T where
    T: Copy + Default + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>
{
}

/// Advance one spring step toward the zero value.
///
/// Componentwise identical to [`crate::step::spring_update`].
pub fn spring_vec_update<T: SpringValue>(pos: T, vel: T, spring_factor: f32, dt: f32) -> (T, T) {
    let spring_exp = spring_exp(spring_factor * dt);
    let b = vel + pos * spring_factor;
    let pos_dt = (pos + b * dt) * spring_exp;
    let vel_dt = b * spring_exp - pos_dt * spring_factor;
    (pos_dt, vel_dt)
}

/// Advance one spring step toward `target_pos`.
pub fn spring_vec_lerp<T: SpringValue>(
    pos: T,
    vel: T,
    target_pos: T,
    spring_factor: f32,
    dt: f32,
) -> (T, T) {
    let (diff_dt, vel_dt) = spring_vec_update(pos - target_pos, vel, spring_factor, dt);
    (target_pos + diff_dt, vel_dt)
}
