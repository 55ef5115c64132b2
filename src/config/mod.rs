//! Defines the `FilterSettings` struct: the configuration surface a host
//! exposes for file filtering.
//!
//! Settings are assembled with [`ConfigBuilder`] (from code or from the CLI),
//! validated once, and then turned into per-pass `FilterOptions`.

use crate::constants::{DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_IGNORE_FILES, DEFAULT_MAX_RESULTS};
use crate::core_types::{FilterMode, FilterOptions};
use std::time::Duration;

pub use builder::ConfigBuilder;
mod builder;
mod validation;

/// Host-level configuration for file filtering.
///
/// # Examples
///
/// ```
/// use pathsift::config::FilterSettings;
/// use pathsift::core_types::FilterMode;
///
/// let settings = FilterSettings::default();
/// assert_eq!(settings.default_mode, FilterMode::Glob);
/// assert_eq!(settings.max_results, 1000);
///
/// let options = settings.options_for("*.rs");
/// assert_eq!(options.pattern, "*.rs");
/// assert!(options.respect_ignore);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FilterSettings {
    /// Mode used when the caller does not pick one.
    #[cfg_attr(feature = "serde", serde(rename = "defaultFilterMode"))]
    pub default_mode: FilterMode,
    /// Whether ignore files pre-filter the candidates.
    pub respect_gitignore: bool,
    /// Upper bound on returned records.
    pub max_results: usize,
    /// Whether matching distinguishes letter case.
    pub case_sensitive: bool,
    /// Quiescence window for re-filtering after input, in milliseconds.
    pub debounce_delay_ms: u64,
    /// Ignore file names read from the workspace root, in precedence order.
    pub ignore_files: Vec<String>,
}

impl FilterSettings {
    /// Builds per-pass options for `pattern` using the default mode.
    pub fn options_for(&self, pattern: &str) -> FilterOptions {
        self.options_with_mode(pattern, self.default_mode)
    }

    /// Builds per-pass options for `pattern` and an explicit `mode`.
    pub fn options_with_mode(&self, pattern: &str, mode: FilterMode) -> FilterOptions {
        FilterOptions {
            pattern: pattern.to_string(),
            mode,
            case_sensitive: self.case_sensitive,
            respect_ignore: self.respect_gitignore,
            max_results: self.max_results,
        }
    }

    /// The debounce window as a `Duration`.
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// Parses settings from a JSON document, filling missing keys with defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        let settings: Self =
            serde_json::from_str(text).context("Failed to parse filter settings JSON")?;
        validation::validate_settings(&settings)?;
        Ok(settings)
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            default_mode: FilterMode::Glob,
            respect_gitignore: true,
            max_results: DEFAULT_MAX_RESULTS,
            case_sensitive: false,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            ignore_files: DEFAULT_IGNORE_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
