//! Settings shipped with the workspace.

use worldbuilder_core::settings::BuilderSettings;

use crate::loader::{load_and_validate, LoadError};

pub const DEFAULT_SETTINGS_RON: &str = include_str!("../../../data/settings.ron");

/// Parse the shipped settings file.
pub fn shipped_settings() -> Result<BuilderSettings, LoadError> {
    load_and_validate(DEFAULT_SETTINGS_RON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_settings_match_defaults() {
        let settings = shipped_settings().unwrap();
        assert_eq!(settings, BuilderSettings::default());
    }
}
