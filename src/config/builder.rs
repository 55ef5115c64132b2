// src/config/builder.rs

use super::validation::validate_settings;
use super::FilterSettings;
use crate::cli::Cli;
use crate::core_types::FilterMode;
use crate::errors::Result;

/// A builder for creating [`FilterSettings`].
///
/// Unset options fall back to the base settings (defaults, or the settings
/// passed to [`ConfigBuilder::from_settings`]). Validation happens in `build`.
///
/// # Examples
///
/// ```
/// use pathsift::config::ConfigBuilder;
/// use pathsift::core_types::FilterMode;
///
/// let settings = ConfigBuilder::new()
///     .default_mode(FilterMode::Fuzzy)
///     .max_results(50)
///     .ignore_files(vec![".gitignore".to_string(), ".prettierignore".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.default_mode, FilterMode::Fuzzy);
/// assert_eq!(settings.max_results, 50);
/// assert_eq!(settings.ignore_files.len(), 2);
///
/// assert!(ConfigBuilder::new().max_results(0).build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    base: FilterSettings,
    default_mode: Option<FilterMode>,
    respect_gitignore: Option<bool>,
    max_results: Option<usize>,
    case_sensitive: Option<bool>,
    debounce_delay_ms: Option<u64>,
    ignore_files: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Creates a builder on top of the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder on top of existing settings (e.g. loaded from a file).
    pub fn from_settings(base: FilterSettings) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::from_cli_with_base(cli, FilterSettings::default())
    }

    /// Creates a builder from command-line arguments layered over `base`.
    ///
    /// Only flags the user actually passed override the base settings.
    pub fn from_cli_with_base(cli: &Cli, base: FilterSettings) -> Self {
        let mut builder = Self::from_settings(base);
        builder.default_mode = cli.mode;
        builder.max_results = cli.max_results;
        builder.ignore_files = cli.ignore_files.clone();
        if cli.case_sensitive {
            builder.case_sensitive = Some(true);
        }
        if cli.no_ignore {
            builder.respect_gitignore = Some(false);
        }
        builder
    }

    /// Sets the mode used when none is specified per pass.
    pub fn default_mode(mut self, mode: FilterMode) -> Self {
        self.default_mode = Some(mode);
        self
    }

    /// Sets whether ignore files are honored.
    pub fn respect_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = Some(respect);
        self
    }

    /// Sets the result cap. Must be greater than zero.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets case-sensitive matching.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Sets the debounce window in milliseconds.
    pub fn debounce_delay_ms(mut self, delay_ms: u64) -> Self {
        self.debounce_delay_ms = Some(delay_ms);
        self
    }

    /// Sets the ignore file names, in precedence order.
    pub fn ignore_files(mut self, names: Vec<String>) -> Self {
        self.ignore_files = Some(names);
        self
    }

    /// Merges the options over the base settings and validates the result.
    pub fn build(self) -> Result<FilterSettings> {
        let base = self.base;
        let settings = FilterSettings {
            default_mode: self.default_mode.unwrap_or(base.default_mode),
            respect_gitignore: self.respect_gitignore.unwrap_or(base.respect_gitignore),
            max_results: self.max_results.unwrap_or(base.max_results),
            case_sensitive: self.case_sensitive.unwrap_or(base.case_sensitive),
            debounce_delay_ms: self.debounce_delay_ms.unwrap_or(base.debounce_delay_ms),
            ignore_files: self.ignore_files.unwrap_or(base.ignore_files),
        };
        validate_settings(&settings)?;
        log::debug!("Filter settings built: {:?}", settings);
        Ok(settings)
    }
}
