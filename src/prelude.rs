//! The `pathsift` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions from the
//! `pathsift` library.
//!
//! # Example
//!
//! ```
//! use pathsift::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let workspace = tempfile::tempdir().unwrap();
//! std::fs::write(workspace.path().join("lib.rs"), "").unwrap();
//!
//! let settings = ConfigBuilder::new().default_mode(FilterMode::Fuzzy).build()?;
//! let records = scan_workspace(workspace.path(), &ScanOptions::default())?;
//! let outcome = filter(&records, &settings.options_for("lib"));
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.records[0].name, "lib.rs");
//!
//! # Ok(())
//! # }
//! ```

pub use crate::cache::{CacheKey, IgnoreCache};
pub use crate::config::{ConfigBuilder, FilterSettings};
pub use crate::core_types::{FilterMode, FilterOptions, MatchResult, PathRecord};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    is_ignored, is_valid, resolve_ignore_patterns, run_with_ignores, FilterOutcome, IgnorePattern,
    IgnoreRules, Matcher,
};
pub use crate::scheduling::{Debouncer, RefreshLimiter};
pub use crate::suggestions::{explain_pattern, pattern_suggestions};
pub use crate::workspace::{read_ignore_files, scan_workspace, ScanOptions};
pub use crate::{execute, filter};
