//! Movement domain: Avian bodies seen through the rigid-body traits.
//!
//! Forces and impulses are integrated straight into `LinearVelocity`, the
//! same component the solver reads on its next step.

use avian2d::prelude as avian_2d;
use avian3d::prelude as avian_3d;
use bevy::prelude::*;

use crate::movement::{Body2d, Body3d, ForceMode};

/// Inverse of an explicit body mass. Bodies without one, or with a
/// non-positive one, are treated as unit mass.
pub fn inverse_mass(mass: Option<f32>) -> f32 {
    match mass {
        Some(mass) if mass > 0.0 => mass.recip(),
        _ => 1.0,
    }
}

fn velocity_change<V>(force: V, mode: ForceMode, inverse_mass: f32, delta_time: f32) -> V
where
    V: std::ops::Mul<f32, Output = V>,
{
    match mode {
        ForceMode::Force => force * (inverse_mass * delta_time),
        ForceMode::Impulse => force * inverse_mass,
    }
}

pub struct AvianBody2d<'a> {
    velocity: &'a mut avian_2d::LinearVelocity,
    inverse_mass: f32,
    delta_time: f32,
}

impl<'a> AvianBody2d<'a> {
    pub fn new(
        velocity: &'a mut avian_2d::LinearVelocity,
        inverse_mass: f32,
        delta_time: f32,
    ) -> Self {
        Self {
            velocity,
            inverse_mass,
            delta_time,
        }
    }
}

impl Body2d for AvianBody2d<'_> {
    fn apply_force(&mut self, force: Vec2, mode: ForceMode) {
        self.velocity.0 += velocity_change(force, mode, self.inverse_mass, self.delta_time);
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }
}

pub struct AvianBody3d<'a> {
    position: &'a mut avian_3d::Position,
    rotation: &'a mut avian_3d::Rotation,
    velocity: &'a mut avian_3d::LinearVelocity,
    inverse_mass: f32,
    delta_time: f32,
}

impl<'a> AvianBody3d<'a> {
    pub fn new(
        position: &'a mut avian_3d::Position,
        rotation: &'a mut avian_3d::Rotation,
        velocity: &'a mut avian_3d::LinearVelocity,
        inverse_mass: f32,
        delta_time: f32,
    ) -> Self {
        Self {
            position,
            rotation,
            velocity,
            inverse_mass,
            delta_time,
        }
    }
}

impl Body3d for AvianBody3d<'_> {
    fn apply_force(&mut self, force: Vec3, mode: ForceMode) {
        self.velocity.0 += velocity_change(force, mode, self.inverse_mass, self.delta_time);
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn position(&self) -> Vec3 {
        self.position.0
    }

    fn set_position(&mut self, position: Vec3) {
        self.position.0 = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation.0
    }

    fn set_rotation(&mut self, rotation: Quat) {
        // Unit length under repeated composition.
        self.rotation.0 = rotation.normalize();
    }
}
