//! Movement domain: player bootstrap from the loaded movement config.

use avian2d::prelude as avian_2d;
use avian3d::prelude as avian_3d;
use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::movement::Player;

const PLANAR_PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const SPATIAL_PLAYER_RADIUS: f32 = 0.4;
const SPATIAL_PLAYER_LENGTH: f32 = 1.0;

pub fn spawn_planar_player(mut commands: Commands, config: Res<MovementConfig>) {
    let tuning = &config.planar;
    let controller = match tuning.controller() {
        Ok(controller) => controller,
        Err(e) => {
            error!("Planar player not spawned: {}", e);
            return;
        }
    };

    info!(
        "Spawning planar player: speed={}, jump_force={:?}, bounce={}, trigger={:?}",
        tuning.params.speed, tuning.params.jump_force, tuning.bounce, tuning.jump_trigger
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLANAR_PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            avian_2d::RigidBody::Dynamic,
            avian_2d::Collider::rectangle(PLANAR_PLAYER_SIZE.x, PLANAR_PLAYER_SIZE.y),
            avian_2d::LockedAxes::ROTATION_LOCKED,
            avian_2d::Mass(1.0),
        ),
    ));
}

pub fn spawn_spatial_player(
    mut commands: Commands,
    config: Res<MovementConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let tuning = &config.spatial;
    let controller = match tuning.controller() {
        Ok(controller) => controller,
        Err(e) => {
            error!("Spatial player not spawned: {}", e);
            return;
        }
    };

    info!(
        "Spawning spatial player: speed={}, jump_force={}, trigger={:?}",
        tuning.params.speed, tuning.params.jump_force, tuning.jump_trigger
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(
            SPATIAL_PLAYER_RADIUS,
            SPATIAL_PLAYER_LENGTH,
        ))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            avian_3d::RigidBody::Dynamic,
            avian_3d::Collider::capsule(SPATIAL_PLAYER_RADIUS, SPATIAL_PLAYER_LENGTH),
            // Rotation comes from the controller only
            avian_3d::LockedAxes::ROTATION_LOCKED,
            avian_3d::Mass(1.0),
        ),
    ));
}
