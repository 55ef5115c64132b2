// src/filtering/mod.rs

//! The multi-mode filtering core.
//!
//! Each matcher is a pure function over `(records, options) -> records`:
//! glob, regex and fuzzy modes, plus the ignore-file resolver that can run
//! as a pre-filter. The orchestrator selects a matcher by mode and never
//! lets a bad pattern escape as an error.

// Declare the sub-modules within the filtering module
pub mod fuzzy;
pub mod glob_filter;
mod ignore_rules;
mod orchestrator;
pub mod regex_filter;

// Re-export the types and functions used by the rest of the crate and the public library API.
pub use fuzzy::{subsequence_score, FuzzyQuery};
pub use glob_filter::GlobFilter;
pub use ignore_rules::{is_ignored, resolve_ignore_patterns, IgnorePattern, IgnoreRules};
pub use orchestrator::{is_valid, run, run_with_ignores, FilterOutcome, Matcher};
pub use regex_filter::{parse_regex_pattern, RegexFilter, RegexFlags};
