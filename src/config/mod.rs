//! Movement tuning loaded from `assets/config/` at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    DemoMode, InputTuningDef, JumpTriggerDef, MovementConfigDef, PlanarTuningDef,
    SpatialTuningDef,
};
pub use loader::{ConfigFormat, ConfigLoadError, load_config, load_or_default, parse_config};

use bevy::prelude::*;

use crate::movement::{
    JumpTrigger, MovementParams, ParamsError, PlanarController, SpatialController,
    validate_mouse_sensitivity,
};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/movement.ron";

#[derive(Debug, Clone, PartialEq)]
pub struct PlanarTuning {
    pub params: MovementParams<Vec2>,
    pub bounce: bool,
    pub jump_trigger: JumpTrigger,
}

impl PlanarTuning {
    pub fn controller(&self) -> Result<PlanarController, ParamsError> {
        Ok(PlanarController::try_new(self.params)?
            .with_bounce(self.bounce)
            .with_jump_trigger(self.jump_trigger))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpatialTuning {
    pub params: MovementParams<f32>,
    pub jump_trigger: JumpTrigger,
}

impl SpatialTuning {
    pub fn controller(&self) -> Result<SpatialController, ParamsError> {
        Ok(SpatialController::try_new(self.params)?.with_jump_trigger(self.jump_trigger))
    }
}

/// Validated movement config.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementConfig {
    pub mode: DemoMode,
    pub planar: PlanarTuning,
    pub spatial: SpatialTuning,
    pub mouse_sensitivity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        MovementConfigDef::default().build()
    }
}

impl From<JumpTriggerDef> for JumpTrigger {
    fn from(def: JumpTriggerDef) -> Self {
        match def {
            JumpTriggerDef::Axis => JumpTrigger::Axis,
            JumpTriggerDef::Press => JumpTrigger::Press,
        }
    }
}

impl MovementConfigDef {
    /// Check every tunable and build the runtime config.
    pub fn resolve(&self) -> Result<MovementConfig, ParamsError> {
        let config = self.build();
        config.planar.params.validate()?;
        config.spatial.params.validate()?;
        validate_mouse_sensitivity(config.mouse_sensitivity)?;
        Ok(config)
    }

    fn build(&self) -> MovementConfig {
        let (jump_x, jump_y) = self.planar.jump_force;
        MovementConfig {
            mode: self.mode,
            planar: PlanarTuning {
                params: MovementParams::new(self.planar.speed, Vec2::new(jump_x, jump_y)),
                bounce: self.planar.bounce,
                jump_trigger: self.planar.jump_trigger.into(),
            },
            spatial: SpatialTuning {
                params: MovementParams::new(self.spatial.speed, self.spatial.jump_force),
                jump_trigger: self.spatial.jump_trigger.into(),
            },
            mouse_sensitivity: self.input.mouse_sensitivity,
        }
    }
}
