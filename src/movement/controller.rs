//! Movement domain: per-object controller driving the backend each tick.
//!
//! One controller type covers both the planar and the spatial case. The
//! dimension parameter decides which axes are sampled, which body type the
//! physics tick writes to, and what a jump force looks like.

use std::marker::PhantomData;

use bevy::prelude::*;

use crate::movement::backend;
use crate::movement::{
    Body2d, Body3d, ContactKind, ContactLedger, InputAxis, InputSource, JumpForce, JumpTrigger,
    MovementParams, ParamsError,
};

/// Planar (2D) controllers: force-driven movement, impulse jump, optional
/// bounce off enemies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

/// Spatial (3D) controllers: kinematic translate-and-rotate movement,
/// velocity-set jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spatial;

pub trait Dimension: Send + Sync + 'static {
    type JumpForce: JumpForce;

    /// Refresh the cached inputs this dimension reads.
    fn sample(state: &mut ControllerState, input: &dyn InputSource);
}

impl Dimension for Planar {
    type JumpForce = Vec2;

    fn sample(state: &mut ControllerState, input: &dyn InputSource) {
        state.horizontal_input = input.axis(InputAxis::Horizontal);
        state.vertical_input = input.axis(InputAxis::Jump);
        state.jump_pressed |= input.jump_just_pressed();
    }
}

impl Dimension for Spatial {
    type JumpForce = f32;

    fn sample(state: &mut ControllerState, input: &dyn InputSource) {
        state.horizontal_input = input.axis(InputAxis::Horizontal);
        state.vertical_input = input.axis(InputAxis::Vertical);
        state.jump_input = input.axis(InputAxis::Jump);
        state.rotation_input = input.axis(InputAxis::MouseY);
        state.jump_pressed |= input.jump_just_pressed();
    }
}

/// Whether the body is standing on something it can jump from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grounding {
    Grounded,
    Airborne,
}

/// Mutable per-object state: cached inputs and contact-derived flags.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    pub horizontal_input: f32,
    /// "Jump" axis on planar controllers, "Vertical" (depth) on spatial ones.
    pub vertical_input: f32,
    pub jump_input: f32,
    /// Mouse Y, applied as yaw.
    pub rotation_input: f32,
    /// Latched until the next physics tick consumes it.
    pub jump_pressed: bool,
    pub is_grounded: bool,
    pub can_bounce: bool,
    /// Fixed step of the most recent physics tick.
    pub delta_time: f32,
    contacts: ContactLedger,
}

impl ControllerState {
    pub fn grounding(&self) -> Grounding {
        if self.is_grounded {
            Grounding::Grounded
        } else {
            Grounding::Airborne
        }
    }

    pub fn contacts(&self) -> &ContactLedger {
        &self.contacts
    }
}

/// What a physics tick did besides moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub bounced: bool,
    pub jumped: bool,
}

#[derive(Component, Debug, Clone)]
pub struct MovementController<D: Dimension> {
    params: MovementParams<D::JumpForce>,
    bounce_enabled: bool,
    jump_trigger: JumpTrigger,
    state: ControllerState,
    _dimension: PhantomData<D>,
}

pub type PlanarController = MovementController<Planar>;
pub type SpatialController = MovementController<Spatial>;

impl<D: Dimension> MovementController<D> {
    pub fn new(params: MovementParams<D::JumpForce>) -> Self {
        Self {
            params,
            bounce_enabled: false,
            jump_trigger: JumpTrigger::default(),
            state: ControllerState::default(),
            _dimension: PhantomData,
        }
    }

    /// Like [`MovementController::new`], rejecting tuning that cannot drive
    /// a body.
    pub fn try_new(params: MovementParams<D::JumpForce>) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self::new(params))
    }

    pub fn with_jump_trigger(mut self, trigger: JumpTrigger) -> Self {
        self.jump_trigger = trigger;
        self
    }

    pub fn params(&self) -> &MovementParams<D::JumpForce> {
        &self.params
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn jump_trigger(&self) -> JumpTrigger {
        self.jump_trigger
    }

    pub fn bounce_enabled(&self) -> bool {
        self.bounce_enabled
    }

    /// Variable-rate tick: cache this frame's input.
    pub fn update(&mut self, input: &dyn InputSource) {
        D::sample(&mut self.state, input);
    }

    pub fn on_contact_begin(&mut self, other: Entity, tag: &str) {
        let kind = ContactKind::from_tag(tag);
        self.state.contacts.begin(other, kind);
        match kind {
            ContactKind::Terrain => self.state.is_grounded = true,
            ContactKind::Enemy if self.bounce_enabled => self.state.can_bounce = true,
            _ => {}
        }
    }

    /// Any floor or wall contact still in place keeps the body grounded.
    pub fn on_contact_persist(&mut self, other: Entity, tag: &str) {
        self.state.contacts.persist(other, ContactKind::from_tag(tag));
        if self.state.contacts.touching_terrain() {
            self.state.is_grounded = true;
        }
    }

    /// Ends are matched by entity; the tag `other` had when the contact began
    /// decides what ends with it.
    pub fn on_contact_end(&mut self, other: Entity) {
        self.state.contacts.end(other);
        if !self.state.contacts.touching_terrain() {
            self.state.is_grounded = false;
        }
        if self.state.contacts.is_empty() {
            self.state.can_bounce = false;
        }
    }

    /// Close every open contact whose entity is no longer in `touching`.
    pub fn retain_contacts(&mut self, touching: impl Fn(Entity) -> bool) {
        let stale: Vec<Entity> = self
            .state
            .contacts
            .entities()
            .filter(|other| !touching(*other))
            .collect();
        for other in stale {
            self.on_contact_end(other);
        }
    }
}

impl MovementController<Planar> {
    /// Bounce off enemy contacts on the next physics tick.
    pub fn with_bounce(mut self, enabled: bool) -> Self {
        self.bounce_enabled = enabled;
        if !enabled {
            self.state.can_bounce = false;
        }
        self
    }

    /// Fixed-rate tick: bounce, move, then jump if grounded. Must run exactly
    /// once per physics step.
    pub fn fixed_update(&mut self, body: &mut dyn Body2d) -> TickReport {
        let mut report = TickReport::default();
        let MovementParams { speed, jump_force } = self.params;

        if self.bounce_enabled {
            report.bounced = backend::bounce(body, jump_force, self.state.can_bounce);
        }

        backend::move_2d(body, self.state.horizontal_input, 0.0, speed);

        if self.state.is_grounded {
            report.jumped = match self.jump_trigger {
                JumpTrigger::Axis => {
                    backend::jump_2d(body, jump_force, self.state.vertical_input)
                }
                JumpTrigger::Press => {
                    backend::jump_2d_on_press(body, jump_force, self.state.jump_pressed)
                }
            };
        }

        self.state.jump_pressed = false;
        report
    }
}

impl MovementController<Spatial> {
    /// Fixed-rate tick: translate along (horizontal, 0, vertical), yaw by the
    /// mouse, then jump if grounded. Must run exactly once per physics step.
    pub fn fixed_update(&mut self, body: &mut dyn Body3d, delta_time: f32) -> TickReport {
        self.state.delta_time = delta_time;
        let MovementParams { speed, jump_force } = self.params;

        backend::move_3d_translate_rotate(
            body,
            self.state.horizontal_input,
            0.0,
            self.state.vertical_input,
            speed,
            0.0,
            self.state.rotation_input,
            delta_time,
        );

        let jumped = match self.jump_trigger {
            JumpTrigger::Axis => backend::jump_3d(
                body,
                self.state.is_grounded,
                self.state.jump_input,
                jump_force,
            ),
            JumpTrigger::Press => backend::jump_3d_on_press(
                body,
                self.state.is_grounded,
                self.state.jump_pressed,
                jump_force,
            ),
        };

        self.state.jump_pressed = false;
        TickReport {
            bounced: false,
            jumped,
        }
    }
}
