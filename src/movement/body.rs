//! Movement domain: rigid-body capabilities the backend writes through.
//!
//! The physics engine owns the body. Controllers only ever see it through
//! these traits for the duration of one physics tick.

use bevy::prelude::*;

/// How a force passed to [`Body2d::apply_force`] / [`Body3d::apply_force`]
/// is integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous force, scaled by the step duration and inverse mass.
    Force,
    /// Instantaneous change in momentum, scaled by inverse mass only.
    Impulse,
}

/// A physics-simulated body in the plane.
pub trait Body2d {
    fn apply_force(&mut self, force: Vec2, mode: ForceMode);
    fn linear_velocity(&self) -> Vec2;
    fn set_linear_velocity(&mut self, velocity: Vec2);
}

/// A physics-simulated body in space.
pub trait Body3d {
    fn apply_force(&mut self, force: Vec3, mode: ForceMode);
    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
}
