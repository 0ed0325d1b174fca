use std::path::Path;

use thiserror::Error;
use worldbuilder_core::settings::BuilderSettings;

use crate::validator::{validate_settings, ValidationError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read settings file '{path}': {reason}")]
    ReadError { path: String, reason: String },
    #[error("Failed to parse settings RON: {0}")]
    SettingsParseError(String),
    #[error("Settings failed validation: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse builder settings from a RON string. Missing fields keep their
/// default values.
pub fn load_settings_from_str(ron_str: &str) -> Result<BuilderSettings, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::SettingsParseError(e.to_string()))
}

/// Parse and validate builder settings.
pub fn load_and_validate(ron_str: &str) -> Result<BuilderSettings, LoadError> {
    let settings = load_settings_from_str(ron_str)?;
    validate_settings(&settings).map_err(LoadError::Invalid)?;
    log::debug!(
        "Loaded settings: build block {}, Y range {}..={}",
        settings.build_block,
        settings.min_y,
        settings.max_y
    );
    Ok(settings)
}

/// Read, parse and validate a settings file.
pub fn load_settings_file(path: &Path) -> Result<BuilderSettings, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let settings = load_and_validate(&text)?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}
