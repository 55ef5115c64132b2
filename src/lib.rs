//! `pathsift` is a library and command-line tool for narrowing a workspace's
//! file list by glob, regular expression, or fuzzy query.
//!
//! As a library, it provides a small pipeline:
//! 1.  **Scan**: Enumerate the workspace into [`PathRecord`]s.
//! 2.  **Ignore**: Resolve `.gitignore`-style files into patterns and drop
//!     ignored records.
//! 3.  **Filter**: Apply the selected matcher and cap the results.
//!
//! The filtering core is pure: it never touches the filesystem, and a bad
//! pattern yields an empty result plus an error message rather than a panic.
//!
//! # Example: Library Usage
//!
//! ```
//! use pathsift::prelude::*;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary workspace.
//! let temp_dir = tempdir().unwrap();
//! fs::create_dir_all(temp_dir.path().join("src")).unwrap();
//! fs::create_dir_all(temp_dir.path().join("node_modules/lib")).unwrap();
//! fs::write(temp_dir.path().join("src/main.ts"), "").unwrap();
//! fs::write(temp_dir.path().join("src/util.js"), "").unwrap();
//! fs::write(temp_dir.path().join("node_modules/lib/index.ts"), "").unwrap();
//! fs::write(temp_dir.path().join(".gitignore"), "node_modules/\n").unwrap();
//!
//! // 2. Build settings and per-pass options.
//! let settings = ConfigBuilder::new().build().unwrap();
//! let options = settings.options_for("*.ts");
//!
//! // 3. Scan, honor .gitignore, and filter.
//! let mut cache = IgnoreCache::default();
//! let outcome = execute(
//!     temp_dir.path(),
//!     &settings,
//!     &ScanOptions::default(),
//!     &options,
//!     &mut cache,
//! )
//! .unwrap();
//!
//! let paths: Vec<&str> = outcome.records.iter().map(|r| r.relative_path.as_str()).collect();
//! assert_eq!(paths, vec!["src/main.ts"]);
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod prelude;
pub mod scheduling;
pub mod suggestions;
pub mod workspace;

// Re-export key public types for easier use as a library
pub use cache::{CacheKey, IgnoreCache};
pub use config::{ConfigBuilder, FilterSettings};
pub use core_types::{FilterMode, FilterOptions, MatchResult, PathRecord};
pub use filtering::FilterOutcome;
pub use workspace::{scan_workspace, ScanOptions};

use crate::errors::Result;
use log::debug;
use std::path::Path;

/// Filters `records` according to `options`.
///
/// This is the pure entry point: no filesystem access, no ignore handling.
/// Invalid patterns produce an empty outcome carrying the error.
pub fn filter(records: &[PathRecord], options: &FilterOptions) -> FilterOutcome {
    filtering::run(records, options)
}

/// Scans `root`, applies its ignore files (when enabled), and filters.
///
/// Ignore patterns are loaded through `cache`, so repeated calls within the
/// cache's time-to-live reuse the parsed patterns.
///
/// # Errors
/// Returns an error only if the workspace cannot be enumerated. Pattern
/// problems are reported through [`FilterOutcome::error`].
pub fn execute(
    root: &Path,
    settings: &FilterSettings,
    scan_options: &ScanOptions,
    options: &FilterOptions,
    cache: &mut IgnoreCache,
) -> Result<FilterOutcome> {
    let records = scan_workspace(root, scan_options)?;
    if !options.respect_ignore {
        return Ok(filtering::run(&records, options));
    }
    let patterns = workspace::load_ignore_patterns(root, &settings.ignore_files, cache);
    debug!(
        "Loaded {} ignore patterns for {}",
        patterns.len(),
        root.display()
    );
    Ok(filtering::run_with_ignores(&records, options, &patterns))
}
