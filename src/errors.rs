//! Defines library-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the conditions that
//! can occur while compiling patterns, matching paths, or loading ignore files,
//! offering more context than a generic I/O or `anyhow` error.

use crate::core_types::FilterMode;
use std::time::Duration;
use thiserror::Error;

/// A specialized `Result` type for pathsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the filtering core and its collaborators.
///
/// None of these are fatal to a filtering pass: matchers degrade to an empty
/// result (or a per-file non-match) and the orchestrator reports the cause
/// alongside a valid record list.
#[derive(Error, Debug)]
pub enum Error {
    /// A glob or regex pattern could not be compiled.
    #[error("invalid {mode} pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The mode the pattern was compiled for.
        mode: FilterMode,
        /// The offending pattern, as supplied by the caller.
        pattern: String,
        /// The compiler's explanation.
        reason: String,
    },

    /// A single regex test exceeded its wall-clock budget.
    #[error("regex match against '{path}' exceeded the {budget:?} budget")]
    MatchTimeout {
        /// The relative path being tested.
        path: String,
        /// The budget that was exceeded.
        budget: Duration,
    },

    /// An ignore file exists but could not be read.
    #[error("could not read ignore file '{path}': {source}")]
    IgnoreFileUnreadable {
        /// The path of the ignore file.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error occurring during file or directory access (walk, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building or validating `FilterSettings`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An option was given a value outside its accepted range.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option name (e.g. `max_results`).
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A filter mode string was not one of `glob`, `regex`, `fuzzy`.
    #[error("Unknown filter mode '{0}' (expected glob, regex or fuzzy)")]
    UnknownMode(String),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
