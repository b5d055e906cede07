//! Movement domain: input resources.

use bevy::prelude::*;

pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;

#[derive(Resource, Debug, Clone)]
pub struct InputSettings {
    /// Scale from raw mouse motion to the "Mouse Y" axis.
    pub mouse_sensitivity: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}
