//! Serialized shape of the movement config file.

use serde::{Deserialize, Serialize};

/// Which kind of body the demo app drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum DemoMode {
    #[default]
    Planar,
    Spatial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum JumpTriggerDef {
    #[default]
    Axis,
    Press,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanarTuningDef {
    pub speed: f32,
    pub jump_force: (f32, f32),
    pub bounce: bool,
    pub jump_trigger: JumpTriggerDef,
}

impl Default for PlanarTuningDef {
    fn default() -> Self {
        Self {
            speed: 10.0,
            jump_force: (0.0, 10.0),
            bounce: true,
            jump_trigger: JumpTriggerDef::Axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpatialTuningDef {
    pub speed: f32,
    pub jump_force: f32,
    pub jump_trigger: JumpTriggerDef,
}

impl Default for SpatialTuningDef {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_force: 10.0,
            jump_trigger: JumpTriggerDef::Axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputTuningDef {
    pub mouse_sensitivity: f32,
}

impl Default for InputTuningDef {
    fn default() -> Self {
        Self {
            mouse_sensitivity: crate::movement::DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

/// Top-level config file. Every section may be omitted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfigDef {
    pub mode: DemoMode,
    pub planar: PlanarTuningDef,
    pub spatial: SpatialTuningDef,
    pub input: InputTuningDef,
}
