//! Movement domain: stateless physics adjustments applied once per physics tick.
//!
//! Every function here performs at most one write to the body it is handed.
//! Grounding and input bookkeeping belong to the controller, not to these
//! functions. Calling any of them more than once per tick compounds the
//! effect.

use bevy::prelude::*;

use crate::movement::{Body2d, Body3d, ForceMode};

/// Push a planar body along `(horizontal, vertical) * speed` as a continuous
/// force. Pass `0.0` for `vertical` when jumping is handled separately.
pub fn move_2d(body: &mut dyn Body2d, horizontal: f32, vertical: f32, speed: f32) {
    body.apply_force(Vec2::new(horizontal, vertical) * speed, ForceMode::Force);
}

/// Kinematically reposition a body along the normalized input direction.
///
/// A zero input vector normalizes to zero, so the body stays where it is.
/// Put forward/backward input in `depth`, not `vertical`.
pub fn move_3d_translate(
    body: &mut dyn Body3d,
    horizontal: f32,
    vertical: f32,
    depth: f32,
    speed: f32,
    delta_time: f32,
) {
    let step = translation_step(horizontal, vertical, depth, speed, delta_time);
    let position = body.position();
    body.set_position(position + step);
}

/// [`move_3d_translate`] followed by a rotation delta built from Euler angles
/// in degrees, `(rotation_x, rotation_y, 0) * speed`, applied after the
/// body's current orientation.
#[allow(clippy::too_many_arguments)]
pub fn move_3d_translate_rotate(
    body: &mut dyn Body3d,
    horizontal: f32,
    vertical: f32,
    depth: f32,
    speed: f32,
    rotation_x: f32,
    rotation_y: f32,
    delta_time: f32,
) {
    move_3d_translate(body, horizontal, vertical, depth, speed, delta_time);

    let delta = euler_degrees(Vec3::new(rotation_x, rotation_y, 0.0) * speed);
    let rotation = body.rotation();
    body.set_rotation(rotation * delta);
}

/// Launch a planar body with `jump_force` as an impulse while `vertical` is
/// positive. Returns whether the impulse was applied.
pub fn jump_2d(body: &mut dyn Body2d, jump_force: Vec2, vertical: f32) -> bool {
    if vertical > 0.0 {
        body.apply_force(jump_force, ForceMode::Impulse);
        return true;
    }
    false
}

/// Edge-triggered variant of [`jump_2d`] for callers that track a
/// "just pressed" button instead of an analog axis.
pub fn jump_2d_on_press(body: &mut dyn Body2d, jump_force: Vec2, pressed: bool) -> bool {
    if pressed {
        body.apply_force(jump_force, ForceMode::Impulse);
        return true;
    }
    false
}

/// Set the vertical velocity of a grounded body to `jump_force` while
/// `vertical` is positive. Horizontal velocity is left as is.
///
/// `is_grounded` is a copy. Leaving the ground does not clear the caller's
/// flag; only a contact-end event does that, so a caller that keeps
/// `vertical` positive while still touching the floor jumps again next tick.
pub fn jump_3d(body: &mut dyn Body3d, is_grounded: bool, vertical: f32, jump_force: f32) -> bool {
    if vertical > 0.0 && is_grounded {
        set_vertical_velocity(body, jump_force);
        return true;
    }
    false
}

/// Edge-triggered variant of [`jump_3d`].
pub fn jump_3d_on_press(
    body: &mut dyn Body3d,
    is_grounded: bool,
    pressed: bool,
    jump_force: f32,
) -> bool {
    if pressed && is_grounded {
        set_vertical_velocity(body, jump_force);
        return true;
    }
    false
}

/// Knock a planar body upward with `jump_force` as an impulse while
/// `can_bounce` holds. There is no cooldown.
pub fn bounce(body: &mut dyn Body2d, jump_force: Vec2, can_bounce: bool) -> bool {
    if can_bounce {
        body.apply_force(jump_force, ForceMode::Impulse);
        return true;
    }
    false
}

/// Normalize `v`, mapping the zero vector (and anything too short to
/// normalize) to zero.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

fn translation_step(
    horizontal: f32,
    vertical: f32,
    depth: f32,
    speed: f32,
    delta_time: f32,
) -> Vec3 {
    let direction = normalize_or_zero(Vec3::new(horizontal, vertical, depth));
    direction * speed * delta_time
}

fn set_vertical_velocity(body: &mut dyn Body3d, vertical: f32) {
    let mut velocity = body.linear_velocity();
    velocity.y = vertical;
    body.set_linear_velocity(velocity);
}

/// Quaternion for Euler angles in degrees, rotating about Z, then X, then Y.
pub(crate) fn euler_degrees(angles: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        angles.y.to_radians(),
        angles.x.to_radians(),
        angles.z.to_radians(),
    )
}
