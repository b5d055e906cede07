//! Movement domain: per-object tuning and its validation.

use bevy::prelude::*;

/// Per-object tunables, fixed at setup time and read every physics tick.
///
/// `J` is the jump force: a vector for planar bodies, a vertical speed for
/// spatial ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementParams<J> {
    pub speed: f32,
    pub jump_force: J,
}

/// How the jump input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpTrigger {
    /// Jump while the "Jump" axis is positive.
    #[default]
    Axis,
    /// Jump only on the tick after the button went down.
    Press,
}

/// A tuning value that cannot drive a body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamsError {
    Speed(f32),
    JumpForce(String),
    MouseSensitivity(f32),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::Speed(speed) => {
                write!(f, "speed must be finite and non-negative, got {}", speed)
            }
            ParamsError::JumpForce(force) => {
                write!(f, "jump force must be finite, got {}", force)
            }
            ParamsError::MouseSensitivity(value) => {
                write!(f, "mouse sensitivity must be positive, got {}", value)
            }
        }
    }
}

impl std::error::Error for ParamsError {}

/// Jump force representations that can be checked for finiteness.
pub trait JumpForce: Copy + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    fn is_finite(&self) -> bool;
}

impl JumpForce for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl JumpForce for Vec2 {
    fn is_finite(&self) -> bool {
        Vec2::is_finite(*self)
    }
}

impl<J: JumpForce> MovementParams<J> {
    pub fn new(speed: f32, jump_force: J) -> Self {
        Self { speed, jump_force }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ParamsError::Speed(self.speed));
        }
        if !self.jump_force.is_finite() {
            return Err(ParamsError::JumpForce(format!("{:?}", self.jump_force)));
        }
        Ok(())
    }
}

pub fn validate_mouse_sensitivity(value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::MouseSensitivity(value))
    }
}
