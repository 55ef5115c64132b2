//! Defines core data structures used throughout the filtering pipeline.
//!
//! `PathRecord` is the unit that flows from the enumeration collaborator through
//! the matchers to the display collaborator. `FilterOptions` describes a single
//! filtering pass, and `MatchResult` carries fuzzy relevance scores.

use crate::constants::DEFAULT_MAX_RESULTS;
use crate::errors::ConfigError;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use std::time::SystemTime;

/// A single candidate file or directory.
///
/// Identity is `absolute_path`. `relative_path` is computed once at ingestion,
/// always uses forward slashes and never starts with a slash; matchers read it
/// as-is and never re-derive it.
///
/// # Examples
///
/// ```
/// use pathsift::core_types::PathRecord;
/// use std::path::Path;
///
/// let record = PathRecord::ingest(
///     Path::new("/work/project"),
///     Path::new("/work/project/src/main.rs"),
///     false,
/// );
///
/// assert_eq!(record.relative_path, "src/main.rs");
/// assert_eq!(record.name, "main.rs");
/// assert!(record.size_bytes.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRecord {
    /// The absolute path on the filesystem.
    pub absolute_path: PathBuf,
    /// The slash-normalized path relative to the workspace root.
    pub relative_path: String,
    /// The final path component (bare file name).
    pub name: String,
    /// Whether this record is a directory.
    pub is_directory: bool,
    /// Size in bytes, when metadata was available.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size_bytes: Option<u64>,
    /// Last modification time, when metadata was available.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub modified_at: Option<SystemTime>,
}

impl PathRecord {
    /// Builds a record for `absolute_path`, computing its relative path against `root`.
    ///
    /// If `absolute_path` is not under `root`, the absolute path itself is
    /// normalized and used (minus any root or prefix component).
    pub fn ingest(root: &Path, absolute_path: &Path, is_directory: bool) -> Self {
        let relative = absolute_path.strip_prefix(root).unwrap_or(absolute_path);
        let relative_path = to_slash_path(relative);
        let name = relative_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            absolute_path: absolute_path.to_path_buf(),
            relative_path,
            name,
            is_directory,
            size_bytes: None,
            modified_at: None,
        }
    }

    /// Attaches optional metadata. Either field may be absent.
    pub fn with_metadata(mut self, size_bytes: Option<u64>, modified_at: Option<SystemTime>) -> Self {
        self.size_bytes = size_bytes;
        self.modified_at = modified_at;
        self
    }
}

/// Joins the normal components of `path` with `/`, dropping roots, prefixes and `.`.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// The match discipline applied by a filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterMode {
    /// Comma-separated include/exclude glob expressions.
    #[default]
    Glob,
    /// A regular expression, bare or wrapped as `/expr/flags`.
    Regex,
    /// Free-text fuzzy query, ranked by relevance.
    Fuzzy,
}

impl FilterMode {
    /// All modes, in display order.
    pub const ALL: [FilterMode; 3] = [FilterMode::Glob, FilterMode::Regex, FilterMode::Fuzzy];

    /// The lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Glob => "glob",
            FilterMode::Regex => "regex",
            FilterMode::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glob" => Ok(FilterMode::Glob),
            "regex" => Ok(FilterMode::Regex),
            "fuzzy" => Ok(FilterMode::Fuzzy),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Options for a single filtering pass.
///
/// An empty `pattern` means "no filtering": every input record is returned,
/// capped at `max_results`.
///
/// # Examples
///
/// ```
/// use pathsift::core_types::{FilterMode, FilterOptions};
///
/// let options = FilterOptions::new("*.rs", FilterMode::Glob);
/// assert_eq!(options.max_results, 1000);
/// assert!(!options.case_sensitive);
/// assert!(options.respect_ignore);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterOptions {
    /// The user-supplied pattern.
    pub pattern: String,
    /// Which matcher to use.
    pub mode: FilterMode,
    /// Whether matching distinguishes letter case.
    pub case_sensitive: bool,
    /// Whether ignore-file patterns pre-filter the candidates.
    pub respect_ignore: bool,
    /// Upper bound on the number of returned records.
    pub max_results: usize,
}

impl FilterOptions {
    /// Creates options with default flags for the given pattern and mode.
    pub fn new(pattern: impl Into<String>, mode: FilterMode) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
            ..Default::default()
        }
    }

    /// Sets case sensitivity.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the result cap.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Sets whether ignore patterns are honored.
    pub fn respect_ignore(mut self, respect_ignore: bool) -> Self {
        self.respect_ignore = respect_ignore;
        self
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            mode: FilterMode::Glob,
            case_sensitive: false,
            respect_ignore: true,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// A fuzzy-ranked record. Higher `score` means more relevant.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched record.
    pub record: PathRecord,
    /// The relevance score; always positive for returned results.
    pub score: f64,
}
