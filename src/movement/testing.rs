//! In-memory bodies and input for movement tests.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::{Body2d, Body3d, ForceMode, InputAxis, InputSource};

/// Fixed step the fakes integrate forces over.
pub(crate) const STEP: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call2d {
    Force(Vec2, ForceMode),
    SetVelocity(Vec2),
}

/// Planar unit-mass body that records every write.
#[derive(Debug, Default)]
pub(crate) struct FakeBody2d {
    pub velocity: Vec2,
    pub calls: Vec<Call2d>,
}

impl FakeBody2d {
    pub fn impulses(&self) -> Vec<Vec2> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call2d::Force(force, ForceMode::Impulse) => Some(*force),
                _ => None,
            })
            .collect()
    }

    pub fn forces(&self) -> Vec<Vec2> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call2d::Force(force, ForceMode::Force) => Some(*force),
                _ => None,
            })
            .collect()
    }
}

impl Body2d for FakeBody2d {
    fn apply_force(&mut self, force: Vec2, mode: ForceMode) {
        self.calls.push(Call2d::Force(force, mode));
        self.velocity += match mode {
            ForceMode::Force => force * STEP,
            ForceMode::Impulse => force,
        };
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.calls.push(Call2d::SetVelocity(velocity));
        self.velocity = velocity;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call3d {
    Force(Vec3, ForceMode),
    SetVelocity(Vec3),
    SetPosition(Vec3),
    SetRotation(Quat),
}

/// Spatial unit-mass body that records every write.
#[derive(Debug)]
pub(crate) struct FakeBody3d {
    pub velocity: Vec3,
    pub position: Vec3,
    pub rotation: Quat,
    pub calls: Vec<Call3d>,
}

impl Default for FakeBody3d {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            calls: Vec::new(),
        }
    }
}

impl FakeBody3d {
    pub fn velocity_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call3d::SetVelocity(_)))
            .count()
    }
}

impl Body3d for FakeBody3d {
    fn apply_force(&mut self, force: Vec3, mode: ForceMode) {
        self.calls.push(Call3d::Force(force, mode));
        self.velocity += match mode {
            ForceMode::Force => force * STEP,
            ForceMode::Impulse => force,
        };
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.calls.push(Call3d::SetVelocity(velocity));
        self.velocity = velocity;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.calls.push(Call3d::SetPosition(position));
        self.position = position;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.calls.push(Call3d::SetRotation(rotation));
        self.rotation = rotation;
    }
}

/// Input source returning fixed axis values; unset axes read as zero.
#[derive(Debug, Default)]
pub(crate) struct ScriptedInput {
    axes: HashMap<InputAxis, f32>,
    pub jump_just_pressed: bool,
}

impl ScriptedInput {
    pub fn with(mut self, axis: InputAxis, value: f32) -> Self {
        self.axes.insert(axis, value);
        self
    }

    pub fn pressed(mut self) -> Self {
        self.jump_just_pressed = true;
        self
    }
}

impl InputSource for ScriptedInput {
    fn axis(&self, axis: InputAxis) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }

    fn jump_just_pressed(&self) -> bool {
        self.jump_just_pressed
    }
}
