//! Config domain: tests for parsing, defaults and validation.

use bevy::prelude::*;
use std::path::Path;

use super::{
    ConfigFormat, ConfigLoadError, DemoMode, MovementConfig, MovementConfigDef, load_config,
    load_or_default, parse_config,
};
use crate::movement::{JumpTrigger, ParamsError};

// -----------------------------------------------------------------------------
// Format detection
// -----------------------------------------------------------------------------

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ConfigFormat::from_path(Path::new("movement.ron")),
        ConfigFormat::Ron
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("movement.JSON")),
        ConfigFormat::Json
    );
    assert_eq!(
        ConfigFormat::from_path(Path::new("movement")),
        ConfigFormat::Ron
    );
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_ron_config() {
    let ron = r#"
        (
            mode: Spatial,
            planar: (speed: 600.0, jump_force: (0.0, 520.0), bounce: false, jump_trigger: Press),
            spatial: (speed: 7.5, jump_force: 12.0, jump_trigger: Axis),
            input: (mouse_sensitivity: 0.25),
        )
    "#;

    let config = parse_config(ron, ConfigFormat::Ron).unwrap();

    assert_eq!(config.mode, DemoMode::Spatial);
    assert_eq!(config.planar.params.speed, 600.0);
    assert_eq!(config.planar.params.jump_force, Vec2::new(0.0, 520.0));
    assert!(!config.planar.bounce);
    assert_eq!(config.planar.jump_trigger, JumpTrigger::Press);
    assert_eq!(config.spatial.params.speed, 7.5);
    assert_eq!(config.spatial.params.jump_force, 12.0);
    assert_eq!(config.mouse_sensitivity, 0.25);
}

#[test]
fn test_parse_partial_ron_uses_defaults() {
    let config = parse_config("(planar: (speed: 3.0))", ConfigFormat::Ron).unwrap();
    let defaults = MovementConfig::default();

    assert_eq!(config.planar.params.speed, 3.0);
    assert_eq!(config.planar.params.jump_force, defaults.planar.params.jump_force);
    assert_eq!(config.spatial, defaults.spatial);
    assert_eq!(config.mode, DemoMode::Planar);
}

#[test]
fn test_parse_json_config() {
    let json = r#"{
        "mode": "Planar",
        "planar": { "speed": 8.0, "jump_force": [0.0, 6.0], "bounce": true },
        "spatial": { "jump_force": 4.0 }
    }"#;

    let config = parse_config(json, ConfigFormat::Json).unwrap();

    assert_eq!(config.planar.params.speed, 8.0);
    assert_eq!(config.planar.params.jump_force, Vec2::new(0.0, 6.0));
    assert!(config.planar.bounce);
    assert_eq!(config.spatial.params.jump_force, 4.0);
    assert_eq!(config.spatial.params.speed, 5.0);
}

#[test]
fn test_parse_rejects_malformed_text() {
    let err = parse_config("(mode: Sideways)", ConfigFormat::Ron).unwrap_err();
    assert!(err.starts_with("Parse error"));
}

#[test]
fn test_parse_rejects_negative_speed() {
    let err = parse_config("(spatial: (speed: -1.0))", ConfigFormat::Ron).unwrap_err();
    assert!(err.starts_with("Invalid tuning"));
}

#[test]
fn test_resolve_rejects_bad_mouse_sensitivity() {
    let mut def = MovementConfigDef::default();
    def.input.mouse_sensitivity = 0.0;

    assert!(matches!(
        def.resolve(),
        Err(ParamsError::MouseSensitivity(_))
    ));
}

// -----------------------------------------------------------------------------
// Defaults and controllers
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_values() {
    let config = MovementConfig::default();

    assert_eq!(config.mode, DemoMode::Planar);
    assert_eq!(config.planar.params.speed, 10.0);
    assert_eq!(config.planar.params.jump_force, Vec2::new(0.0, 10.0));
    assert!(config.planar.bounce);
    assert_eq!(config.spatial.params.speed, 5.0);
    assert_eq!(config.spatial.params.jump_force, 10.0);
    assert_eq!(config.mouse_sensitivity, 0.1);
    assert!(MovementConfigDef::default().resolve().is_ok());
}

#[test]
fn test_tuning_builds_configured_controllers() {
    let config = MovementConfig::default();

    let planar = config.planar.controller().unwrap();
    assert!(planar.bounce_enabled());
    assert_eq!(planar.params(), &config.planar.params);
    assert_eq!(planar.jump_trigger(), JumpTrigger::Axis);

    let spatial = config.spatial.controller().unwrap();
    assert!(!spatial.bounce_enabled());
    assert_eq!(spatial.params(), &config.spatial.params);
}

#[test]
fn test_tuning_refuses_unusable_controller() {
    let mut config = MovementConfig::default();
    config.planar.params.speed = -1.0;
    config.spatial.params.jump_force = f32::NAN;

    assert!(matches!(
        config.planar.controller(),
        Err(ParamsError::Speed(_))
    ));
    assert!(matches!(
        config.spatial.controller(),
        Err(ParamsError::JumpForce(_))
    ));
}

// -----------------------------------------------------------------------------
// Loading from disk
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::DEFAULT_CONFIG_PATH);

    let config = load_config(&path).unwrap();

    assert_eq!(config.mode, DemoMode::Planar);
    assert!(config.planar.params.validate().is_ok());
}

#[test]
fn test_missing_file_reports_io_error() {
    let err: ConfigLoadError = load_config(Path::new("does/not/exist.ron")).unwrap_err();

    assert_eq!(err.file, "does/not/exist.ron");
    assert!(err.message.starts_with("IO error"));
    assert!(err.to_string().starts_with("Failed to load does/not/exist.ron"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = load_or_default(Path::new("does/not/exist.ron"));
    assert_eq!(config, MovementConfig::default());
}
