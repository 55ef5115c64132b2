// src/filtering/regex_filter.rs

use crate::constants::{REGEX_MATCH_BUDGET, REGEX_SIZE_LIMIT};
use crate::core_types::{FilterMode, FilterOptions, PathRecord};
use crate::errors::{Error, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::time::{Duration, Instant};

/// Recognizes the wrapped `/expr/flags` form.
static WRAPPED_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/(.+)/([gimuy]*)$").unwrap());

/// Flags accepted in the `/expr/flags` form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    /// `g`: accepted for compatibility, no effect on a yes/no test.
    pub global: bool,
    /// `i`: case-insensitive.
    pub ignore_case: bool,
    /// `m`: `^`/`$` match at line boundaries.
    pub multi_line: bool,
    /// `u`: accepted; Unicode matching is always enabled.
    pub unicode: bool,
    /// `y`: the match must start at the beginning of the haystack.
    pub sticky: bool,
}

impl RegexFlags {
    fn parse(flags: &str) -> std::result::Result<Self, String> {
        let mut parsed = RegexFlags::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multi_line,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                other => return Err(format!("unsupported flag '{}'", other)),
            };
            if *slot {
                return Err(format!("duplicate flag '{}'", c));
            }
            *slot = true;
        }
        Ok(parsed)
    }
}

/// Splits a user pattern into its expression and flags.
///
/// `/expr/flags` is unwrapped when the flags are drawn from `g,i,m,u,y`; any
/// other input is a bare expression with no flags.
///
/// # Examples
///
/// ```
/// use pathsift::filtering::parse_regex_pattern;
///
/// let (expr, flags) = parse_regex_pattern("/^src\\//i").unwrap();
/// assert_eq!(expr, "^src\\/");
/// assert!(flags.ignore_case);
///
/// let (expr, flags) = parse_regex_pattern("\\.ts$").unwrap();
/// assert_eq!(expr, "\\.ts$");
/// assert!(!flags.ignore_case);
/// ```
pub fn parse_regex_pattern(pattern: &str) -> Result<(&str, RegexFlags)> {
    match WRAPPED_PATTERN.captures(pattern) {
        Some(caps) => {
            let (Some(expr), Some(flags)) = (caps.get(1), caps.get(2)) else {
                return Ok((pattern, RegexFlags::default()));
            };
            let flags = RegexFlags::parse(flags.as_str()).map_err(|reason| Error::InvalidPattern {
                mode: FilterMode::Regex,
                pattern: pattern.to_string(),
                reason,
            })?;
            Ok((expr.as_str(), flags))
        }
        None => Ok((pattern, RegexFlags::default())),
    }
}

/// A compiled regex filter with a per-test time budget.
#[derive(Debug, Clone)]
pub struct RegexFilter {
    regex: Regex,
    sticky: bool,
    budget: Duration,
}

impl RegexFilter {
    /// Compiles `pattern`. Unless `case_sensitive` is set, matching is case-insensitive.
    pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let (expr, flags) = parse_regex_pattern(pattern)?;
        let regex = RegexBuilder::new(expr)
            .case_insensitive(flags.ignore_case || !case_sensitive)
            .multi_line(flags.multi_line)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|e| Error::InvalidPattern {
                mode: FilterMode::Regex,
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        debug!("Compiled regex filter '{}' (flags: {:?})", pattern, flags);
        Ok(Self {
            regex,
            sticky: flags.sticky,
            budget: REGEX_MATCH_BUDGET,
        })
    }

    /// Replaces the per-test wall-clock budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    fn matches_haystack(&self, haystack: &str) -> bool {
        if self.sticky {
            self.regex.find(haystack).is_some_and(|m| m.start() == 0)
        } else {
            self.regex.is_match(haystack)
        }
    }

    /// Tests the relative path, then the bare name; either hit is enough.
    ///
    /// A test that runs past the budget is reported as `Error::MatchTimeout`.
    pub fn try_match(&self, record: &PathRecord) -> Result<bool> {
        let started = Instant::now();
        let hit = self.matches_haystack(&record.relative_path)
            || self.matches_haystack(&record.name);
        if started.elapsed() >= self.budget {
            return Err(Error::MatchTimeout {
                path: record.relative_path.clone(),
                budget: self.budget,
            });
        }
        Ok(hit)
    }

    /// Like [`try_match`](Self::try_match), treating a timeout as a non-match.
    pub fn is_match(&self, record: &PathRecord) -> bool {
        match self.try_match(record) {
            Ok(hit) => hit,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Filters `records`, preserving their order, and keeps at most `max_results`.
    pub fn filter(&self, records: &[PathRecord], max_results: usize) -> Vec<PathRecord> {
        records
            .iter()
            .filter(|record| self.is_match(record))
            .take(max_results)
            .cloned()
            .collect()
    }
}

/// Applies a regex pattern to `records`.
///
/// An empty pattern returns every record (capped); an invalid pattern yields
/// an empty result rather than an error.
pub fn apply(records: &[PathRecord], options: &FilterOptions) -> Vec<PathRecord> {
    if options.pattern.is_empty() {
        return records.iter().take(options.max_results).cloned().collect();
    }
    match RegexFilter::compile(&options.pattern, options.case_sensitive) {
        Ok(filter) => filter.filter(records, options.max_results),
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}

/// Returns `true` if `pattern` is empty or compiles.
pub fn is_valid(pattern: &str) -> bool {
    pattern.is_empty() || RegexFilter::compile(pattern, false).is_ok()
}
