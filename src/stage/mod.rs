//! Demo stage: camera, terrain and an enemy for the player to walk, jump
//! and bounce on.

use avian2d::prelude as avian_2d;
use avian3d::prelude as avian_3d;
use bevy::prelude::*;

use crate::config::DemoMode;
use crate::movement::{Tag, spawn_planar_player, spawn_spatial_player};

/// Planar gravity in pixels per second squared.
const PLANAR_GRAVITY: f32 = 980.0;

pub struct StagePlugin {
    pub mode: DemoMode,
}

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        match self.mode {
            DemoMode::Planar => {
                app.insert_resource(avian_2d::Gravity(Vec2::NEG_Y * PLANAR_GRAVITY))
                    .add_systems(
                        Startup,
                        (setup_planar_camera, spawn_planar_room, spawn_planar_player),
                    );
            }
            DemoMode::Spatial => {
                app.add_systems(
                    Startup,
                    (setup_spatial_camera, spawn_spatial_room, spawn_spatial_player),
                );
            }
        }
    }
}

fn setup_planar_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn setup_spatial_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 6.0, 14.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_planar_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let enemy_color = Color::srgb(0.8, 0.3, 0.3);

    let blocks = [
        // Ground
        (Tag::floor(), ground_color, Vec2::new(0.0, -200.0), Vec2::new(1200.0, 40.0)),
        // Walls
        (Tag::wall(), wall_color, Vec2::new(-600.0, 0.0), Vec2::new(40.0, 440.0)),
        (Tag::wall(), wall_color, Vec2::new(600.0, 0.0), Vec2::new(40.0, 440.0)),
        // Enemy to bounce off
        (Tag::enemy(), enemy_color, Vec2::new(250.0, -165.0), Vec2::new(40.0, 30.0)),
    ];

    for (tag, color, position, size) in blocks {
        commands.spawn((
            tag,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            avian_2d::RigidBody::Static,
            avian_2d::Collider::rectangle(size.x, size.y),
        ));
    }
}

fn spawn_spatial_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let blocks = [
        (
            Tag::floor(),
            Color::srgb(0.4, 0.5, 0.4),
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(20.0, 1.0, 20.0),
        ),
        (
            Tag::wall(),
            Color::srgb(0.3, 0.3, 0.4),
            Vec3::new(0.0, 2.0, -10.0),
            Vec3::new(20.0, 4.0, 1.0),
        ),
    ];

    for (tag, color, position, size) in blocks {
        commands.spawn((
            tag,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(position),
            avian_3d::RigidBody::Static,
            avian_3d::Collider::cuboid(size.x, size.y, size.z),
        ));
    }
}
