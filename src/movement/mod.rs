//! Movement domain: walking, jumping and bouncing for physics-driven bodies.
//!
//! [`backend`] holds the stateless per-tick physics adjustments,
//! [`MovementController`] decides when to apply them, and the plugins bind
//! both to Avian bodies, keyboard/mouse input and collision messages.

pub mod backend;
mod bodies;
mod body;
mod bootstrap;
mod components;
mod contacts;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod input;
mod params;
mod resources;
mod systems;

#[cfg(test)]
mod testing;

pub use bodies::{AvianBody2d, AvianBody3d, inverse_mass};
pub use body::{Body2d, Body3d, ForceMode};
pub use bootstrap::{spawn_planar_player, spawn_spatial_player};
pub use components::{Player, Tag};
pub use contacts::{ContactKind, ContactLedger, ENEMY_TAG, FLOOR_TAG, WALL_TAG};
pub use controller::{
    ControllerState, Dimension, Grounding, MovementController, Planar, PlanarController,
    Spatial, SpatialController, TickReport,
};
pub use input::{InputAxis, InputSource};
pub use params::{
    JumpForce, JumpTrigger, MovementParams, ParamsError, validate_mouse_sensitivity,
};
pub use resources::{DEFAULT_MOUSE_SENSITIVITY, InputSettings};
pub use systems::KeyboardAxes;

use avian2d::prelude as avian_2d;
use avian3d::prelude as avian_3d;
use bevy::prelude::*;

use crate::movement::systems::{
    audit_planar_bodies, audit_spatial_bodies, drive_planar_bodies, drive_spatial_bodies,
    sample_input, track_planar_contacts, track_spatial_contacts,
};

/// Ordering of the fixed-step movement work.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Apply contact begin/persist/end to controllers.
    Contacts,
    /// Bounce, move and jump.
    Drive,
}

/// Drives [`PlanarController`] bodies. Requires Avian 2D physics.
pub struct PlanarMovementPlugin;

impl Plugin for PlanarMovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSettings>()
            .register_required_components::<PlanarController, avian_2d::RigidBody>()
            .register_required_components::<PlanarController, avian_2d::LinearVelocity>()
            .register_required_components::<PlanarController, avian_2d::CollidingEntities>()
            .register_required_components::<PlanarController, avian_2d::CollisionEventsEnabled>()
            .configure_sets(
                FixedUpdate,
                (MovementSet::Contacts, MovementSet::Drive).chain(),
            )
            .add_systems(Update, (sample_input::<Planar>, audit_planar_bodies))
            .add_systems(
                FixedUpdate,
                (
                    track_planar_contacts.in_set(MovementSet::Contacts),
                    drive_planar_bodies.in_set(MovementSet::Drive),
                ),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            FixedUpdate,
            dev::trace_state_changes::<Planar>.after(MovementSet::Drive),
        );
    }
}

/// Drives [`SpatialController`] bodies. Requires Avian 3D physics.
pub struct SpatialMovementPlugin;

impl Plugin for SpatialMovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSettings>()
            .register_required_components::<SpatialController, avian_3d::RigidBody>()
            .register_required_components::<SpatialController, avian_3d::LinearVelocity>()
            .register_required_components::<SpatialController, avian_3d::CollidingEntities>()
            .register_required_components::<SpatialController, avian_3d::CollisionEventsEnabled>()
            .configure_sets(
                FixedUpdate,
                (MovementSet::Contacts, MovementSet::Drive).chain(),
            )
            .add_systems(Update, (sample_input::<Spatial>, audit_spatial_bodies))
            .add_systems(
                FixedUpdate,
                (
                    track_spatial_contacts.in_set(MovementSet::Contacts),
                    drive_spatial_bodies.in_set(MovementSet::Drive),
                ),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            FixedUpdate,
            dev::trace_state_changes::<Spatial>.after(MovementSet::Drive),
        );
    }
}
