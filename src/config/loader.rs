//! Loader for the movement config file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::MovementConfig;
use super::data::MovementConfigDef;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Encoding of a config file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ron,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Ron,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate config text.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<MovementConfig, String> {
    let def: MovementConfigDef = match format {
        ConfigFormat::Ron => ron_options()
            .from_str(contents)
            .map_err(|e| format!("Parse error: {}", e))?,
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(|e| format!("Parse error: {}", e))?
        }
    };

    def.resolve().map_err(|e| format!("Invalid tuning: {}", e))
}

pub fn load_config(path: &Path) -> Result<MovementConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_config(&contents, ConfigFormat::from_path(path)).map_err(|message| ConfigLoadError {
        file: file_name,
        message,
    })
}

/// Load the config at `path`, falling back to defaults on any failure.
pub fn load_or_default(path: &Path) -> MovementConfig {
    match load_config(path) {
        Ok(config) => {
            info!(
                "Loaded movement config from {}: mode={:?}",
                path.display(),
                config.mode
            );
            config
        }
        Err(e) => {
            warn!("{}, using default movement config", e);
            MovementConfig::default()
        }
    }
}
