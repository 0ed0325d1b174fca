use thiserror::Error;
use worldbuilder_core::settings::BuilderSettings;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("min_y {min_y} must be below max_y {max_y}")]
    MinAboveMax { min_y: i32, max_y: i32 },
    #[error("max_fill_volume must be at least 1")]
    ZeroFillVolume,
    #[error("build_block must not be air")]
    AirBuildBlock,
    #[error("mark_block must not be air while marks are shown")]
    AirMarkBlock,
}

/// Check builder settings for values no build can work with.
pub fn validate_settings(settings: &BuilderSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.min_y >= settings.max_y {
        errors.push(ValidationError::MinAboveMax {
            min_y: settings.min_y,
            max_y: settings.max_y,
        });
    }
    if settings.max_fill_volume == 0 {
        errors.push(ValidationError::ZeroFillVolume);
    }
    if settings.build_block.is_air() {
        errors.push(ValidationError::AirBuildBlock);
    }
    if settings.show_marks && settings.mark_block.is_air() {
        errors.push(ValidationError::AirMarkBlock);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
