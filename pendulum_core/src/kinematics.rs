//! Energy-conservation kinematics for a frictionless point-mass pendulum.
//!
//! Potential energy lost falling from the apex equals kinetic energy gained:
//! `m * g * (h_max - h) = 0.5 * m * v^2`, so `v = sqrt(2 * g * (h_max - h))`,
//! and for a rigid arm `v = length * w`.

use crate::error::{PendulumError, PendulumResult};

pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Angular speed (rad/s) of the bob at `current_height` above rest, given it was
/// released from `max_height`.
///
/// The height difference is taken as an absolute value, so a bob above its apex
/// reports the speed it would have the same distance below it.
pub fn angular_velocity(current_height: f32, max_height: f32, length: f32, gravity: f32) -> f32 {
    let v = (2.0 * gravity * (max_height - current_height).abs()).sqrt();
    v / length
}

/// Apex height of an arm of `length` swung laterally by `swing_width`.
///
/// NaN when `swing_width > length`; see [`try_max_height`].
pub fn compute_max_height(length: f32, swing_width: f32) -> f32 {
    length - (length.powi(2) - swing_width.powi(2)).sqrt()
}

pub fn try_max_height(length: f32, swing_width: f32) -> PendulumResult<f32> {
    if !length.is_finite()
        || length <= 0.0
        || !swing_width.is_finite()
        || swing_width < 0.0
        || swing_width >= length
    {
        return Err(PendulumError::Config(format!(
            "apex height undefined for length {length} and swing_width {swing_width}"
        )));
    }
    Ok(compute_max_height(length, swing_width))
}

/// Height of the bob above rest when the arm is at `angle` radians from vertical.
pub fn height_at_angle(length: f32, angle: f32) -> f32 {
    length * (1.0 - angle.cos())
}

/// Half-angle of the swing, radians.
pub fn max_angle(length: f32, swing_width: f32) -> f32 {
    (swing_width / length).asin()
}
