//! Degree wrapping and approximate float comparison

/// Map a degree value into the canonical range `(-180, 180]`.
///
/// The difference of two wrapped angles, wrapped again, is the shortest signed
/// angular distance between them.
pub fn wrap_deg(deg: f32) -> f32 {
    let rem = deg % 360.0;
    if rem > 180.0 {
        rem - 360.0
    } else if rem <= -180.0 {
        rem + 360.0
    } else {
        rem
    }
}

/// Absolute-difference float comparison.
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
