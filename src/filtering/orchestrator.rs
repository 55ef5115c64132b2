// src/filtering/orchestrator.rs

use super::fuzzy::FuzzyQuery;
use super::glob_filter::GlobFilter;
use super::ignore_rules::{IgnorePattern, IgnoreRules};
use super::regex_filter::RegexFilter;
use super::{fuzzy, glob_filter, regex_filter};
use crate::core_types::{FilterMode, FilterOptions, PathRecord};
use crate::errors::{Error, Result};
use log::{debug, warn};
use tracing::instrument;

/// A matcher compiled once for a filtering pass, selected by `FilterMode`.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Comma-separated include/exclude globs.
    Glob(GlobFilter),
    /// A regular expression tested against path and name.
    Regex(RegexFilter),
    /// A ranked fuzzy query.
    Fuzzy(FuzzyQuery),
}

impl Matcher {
    /// Compiles the matcher described by `options`.
    pub fn compile(options: &FilterOptions) -> Result<Self> {
        Ok(match options.mode {
            FilterMode::Glob => {
                Matcher::Glob(GlobFilter::compile(&options.pattern, options.case_sensitive)?)
            }
            FilterMode::Regex => {
                Matcher::Regex(RegexFilter::compile(&options.pattern, options.case_sensitive)?)
            }
            FilterMode::Fuzzy => {
                Matcher::Fuzzy(FuzzyQuery::new(&options.pattern, options.case_sensitive))
            }
        })
    }

    /// The mode this matcher implements.
    pub fn mode(&self) -> FilterMode {
        match self {
            Matcher::Glob(_) => FilterMode::Glob,
            Matcher::Regex(_) => FilterMode::Regex,
            Matcher::Fuzzy(_) => FilterMode::Fuzzy,
        }
    }

    /// Filters (and for fuzzy, ranks) `records`, keeping at most `max_results`.
    pub fn apply(&self, records: &[PathRecord], max_results: usize) -> Vec<PathRecord> {
        match self {
            Matcher::Glob(filter) => filter.filter(records, max_results),
            Matcher::Regex(filter) => filter.filter(records, max_results),
            Matcher::Fuzzy(query) => query
                .rank(records, max_results)
                .into_iter()
                .map(|result| result.record)
                .collect(),
        }
    }
}

/// Returns `true` if `pattern` would compile under `mode`.
pub fn is_valid(pattern: &str, mode: FilterMode) -> bool {
    match mode {
        FilterMode::Glob => glob_filter::is_valid(pattern),
        FilterMode::Regex => regex_filter::is_valid(pattern),
        FilterMode::Fuzzy => fuzzy::is_valid(pattern),
    }
}

/// The result of a filtering pass: always a usable record list, plus the
/// error that emptied it, if any.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Filtered records, never longer than the requested cap.
    pub records: Vec<PathRecord>,
    /// The matcher-level failure, if the pass could not run.
    pub error: Option<Error>,
}

impl FilterOutcome {
    /// Returns `true` if the pass completed without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// A user-facing summary of the failure, e.g. `filter error: invalid regex pattern ...`.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| format!("filter error: {}", e))
    }
}

/// Runs one filtering pass over `records`.
///
/// Dispatches on `options.mode`, then applies `options.max_results` again as a
/// safety net. A pattern that fails to compile produces an empty record list
/// and the error in [`FilterOutcome::error`]; nothing is propagated.
///
/// # Examples
///
/// ```
/// use pathsift::core_types::{FilterMode, FilterOptions, PathRecord};
/// use pathsift::filtering::run;
/// use std::path::Path;
///
/// let root = Path::new("/ws");
/// let records: Vec<PathRecord> = ["src/file1.ts", "src/file2.js", "docs/README.md"]
///     .iter()
///     .map(|p| PathRecord::ingest(root, &root.join(p), false))
///     .collect();
///
/// let outcome = run(&records, &FilterOptions::new("*.ts", FilterMode::Glob));
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.records.len(), 1);
///
/// let outcome = run(&records, &FilterOptions::new("(", FilterMode::Regex));
/// assert!(outcome.records.is_empty());
/// assert!(outcome.error_message().unwrap().starts_with("filter error:"));
/// ```
#[instrument(level = "debug", skip_all, fields(mode = %options.mode, pattern = %options.pattern, candidates = records.len()))]
pub fn run(records: &[PathRecord], options: &FilterOptions) -> FilterOutcome {
    let matcher = match Matcher::compile(options) {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!("Filter pass aborted: {}", e);
            return FilterOutcome {
                records: Vec::new(),
                error: Some(e),
            };
        }
    };
    let mut records = matcher.apply(records, options.max_results);
    records.truncate(options.max_results);
    debug!("{} filter produced {} records", matcher.mode(), records.len());
    FilterOutcome {
        records,
        error: None,
    }
}

/// Like [`run`], but first drops records judged ignored by `patterns`.
///
/// The ignore pre-filter only applies when `options.respect_ignore` is set.
pub fn run_with_ignores(
    records: &[PathRecord],
    options: &FilterOptions,
    patterns: &[IgnorePattern],
) -> FilterOutcome {
    if !options.respect_ignore || patterns.is_empty() {
        return run(records, options);
    }
    let rules = IgnoreRules::new(patterns);
    let candidates: Vec<PathRecord> = records
        .iter()
        .filter(|record| !rules.is_ignored(&record.relative_path))
        .cloned()
        .collect();
    debug!(
        "Ignore rules removed {} of {} candidates",
        records.len() - candidates.len(),
        records.len()
    );
    run(&candidates, options)
}
