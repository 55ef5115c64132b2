// src/config/validation.rs

use super::FilterSettings;
use crate::constants::KNOWN_IGNORE_FILES;
use crate::errors::{ConfigError, Result};

/// Validates settings combinations that the type system cannot express.
pub(super) fn validate_settings(settings: &FilterSettings) -> Result<()> {
    if settings.max_results == 0 {
        return Err(ConfigError::InvalidValue {
            option: "max_results".to_string(),
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    for name in &settings.ignore_files {
        validate_ignore_file_name(name)?;
    }
    Ok(())
}

fn validate_ignore_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "ignore_files".to_string(),
            reason: "file names must not be empty".to_string(),
        }
        .into());
    }
    if name.contains('/') || name.contains('\\') {
        return Err(ConfigError::InvalidValue {
            option: "ignore_files".to_string(),
            reason: format!("'{}' must be a file name, not a path", name),
        }
        .into());
    }
    if !KNOWN_IGNORE_FILES.contains(&name) {
        log::debug!("Using custom ignore file name '{}'", name);
    }
    Ok(())
}
