//! Movement domain: input sampling for locomotion.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::movement::{Dimension, InputAxis, InputSettings, InputSource, MovementController};

/// One frame of keyboard and mouse state, read as named axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardAxes {
    pub horizontal: f32,
    pub vertical: f32,
    pub jump: f32,
    pub mouse_y: f32,
    pub jump_just_pressed: bool,
}

impl KeyboardAxes {
    pub fn read(keyboard: &ButtonInput<KeyCode>, mouse_delta: Vec2, sensitivity: f32) -> Self {
        // Horizontal axis
        let mut horizontal = 0.0;
        if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
            horizontal -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
            horizontal += 1.0;
        }

        // Vertical axis (depth for spatial controllers)
        let mut vertical = 0.0;
        if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
            vertical -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
            vertical += 1.0;
        }

        let jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);

        Self {
            horizontal,
            vertical,
            jump: if jump_held { 1.0 } else { 0.0 },
            // Screen space grows downward; the axis grows upward.
            mouse_y: -mouse_delta.y * sensitivity,
            jump_just_pressed: keyboard.just_pressed(KeyCode::Space)
                || keyboard.just_pressed(KeyCode::KeyK),
        }
    }
}

impl InputSource for KeyboardAxes {
    fn axis(&self, axis: InputAxis) -> f32 {
        match axis {
            InputAxis::Horizontal => self.horizontal,
            InputAxis::Vertical => self.vertical,
            InputAxis::Jump => self.jump,
            InputAxis::MouseY => self.mouse_y,
        }
    }

    fn jump_just_pressed(&self) -> bool {
        self.jump_just_pressed
    }
}

pub(crate) fn sample_input<D: Dimension>(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    settings: Res<InputSettings>,
    mut controllers: Query<&mut MovementController<D>>,
) {
    let axes = KeyboardAxes::read(&keyboard, mouse_motion.delta, settings.mouse_sensitivity);

    for mut controller in &mut controllers {
        controller.update(&axes);
    }
}
