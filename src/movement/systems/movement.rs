//! Movement domain: fixed-step systems driving bodies through controllers.

use avian2d::prelude as avian_2d;
use avian3d::prelude as avian_3d;
use bevy::prelude::*;

use crate::movement::{
    AvianBody2d, AvianBody3d, PlanarController, SpatialController, TickReport, inverse_mass,
};

fn log_report(entity: Entity, report: TickReport) {
    if report.bounced {
        debug!("Bounce: entity={:?}", entity);
    }
    if report.jumped {
        debug!("Jump: entity={:?}", entity);
    }
}

pub(crate) fn drive_planar_bodies(
    time: Res<Time<Fixed>>,
    mut query: Query<(
        Entity,
        &mut PlanarController,
        &mut avian_2d::LinearVelocity,
        Option<&avian_2d::Mass>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, mut velocity, mass) in &mut query {
        let mut body = AvianBody2d::new(&mut velocity, inverse_mass(mass.map(|m| m.0)), dt);
        let report = controller.fixed_update(&mut body);
        log_report(entity, report);
    }
}

pub(crate) fn drive_spatial_bodies(
    time: Res<Time<Fixed>>,
    mut query: Query<(
        Entity,
        &mut SpatialController,
        &mut avian_3d::Position,
        &mut avian_3d::Rotation,
        &mut avian_3d::LinearVelocity,
        Option<&avian_3d::Mass>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, mut position, mut rotation, mut velocity, mass) in &mut query {
        let mut body = AvianBody3d::new(
            &mut position,
            &mut rotation,
            &mut velocity,
            inverse_mass(mass.map(|m| m.0)),
            dt,
        );
        let report = controller.fixed_update(&mut body, dt);
        log_report(entity, report);
    }
}

/// A controller on a static body can never move it.
pub(crate) fn audit_planar_bodies(
    query: Query<(Entity, &avian_2d::RigidBody), Added<PlanarController>>,
) {
    for (entity, rigid_body) in &query {
        if *rigid_body == avian_2d::RigidBody::Static {
            error!(
                "Planar controller on static body {:?}: movement will have no effect",
                entity
            );
        }
    }
}

pub(crate) fn audit_spatial_bodies(
    query: Query<(Entity, &avian_3d::RigidBody), Added<SpatialController>>,
) {
    for (entity, rigid_body) in &query {
        if *rigid_body == avian_3d::RigidBody::Static {
            error!(
                "Spatial controller on static body {:?}: movement will have no effect",
                entity
            );
        }
    }
}
