use std::path::Path;

use bevy::prelude::*;

use olympia_locomotion::config::{self, DemoMode};
use olympia_locomotion::movement::{InputSettings, PlanarMovementPlugin, SpatialMovementPlugin};
use olympia_locomotion::stage::StagePlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Olympia Locomotion".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    // Loaded after DefaultPlugins so the outcome is logged.
    let config = config::load_or_default(Path::new(config::DEFAULT_CONFIG_PATH));
    let mode = config.mode;

    app.insert_resource(InputSettings {
        mouse_sensitivity: config.mouse_sensitivity,
    })
    .insert_resource(config)
    .add_plugins(StagePlugin { mode });

    match mode {
        DemoMode::Planar => {
            app.add_plugins((
                avian2d::prelude::PhysicsPlugins::default(),
                PlanarMovementPlugin,
            ));
        }
        DemoMode::Spatial => {
            app.add_plugins((
                avian3d::prelude::PhysicsPlugins::default(),
                SpatialMovementPlugin,
            ));
        }
    }

    app.run();
}
