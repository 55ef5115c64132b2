// src/filtering/glob_filter.rs

use crate::core_types::{FilterMode, FilterOptions, PathRecord};
use crate::errors::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use log::{debug, warn};

/// A compiled comma-separated glob expression.
///
/// A record passes when it matches at least one inclusion (or there are no
/// inclusions) and matches no exclusion. Matching runs against the relative
/// path; a sub-pattern without `/` may also match the bare file name.
#[derive(Debug, Clone, Default)]
pub struct GlobFilter {
    includes: Vec<GlobEntry>,
    excludes: Vec<GlobEntry>,
}

#[derive(Debug, Clone)]
struct GlobEntry {
    matcher: GlobMatcher,
    match_base: bool,
}

impl GlobEntry {
    fn is_match(&self, record: &PathRecord) -> bool {
        self.matcher.is_match(&record.relative_path)
            || (self.match_base && self.matcher.is_match(&record.name))
    }
}

impl GlobFilter {
    /// Compiles `pattern`, failing on the first sub-pattern that does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::filtering::GlobFilter;
    ///
    /// let filter = GlobFilter::compile("src/**/*.{ts,tsx}, !*.spec.ts", false).unwrap();
    /// assert_eq!(filter.inclusion_count(), 1);
    /// assert_eq!(filter.exclusion_count(), 1);
    /// assert!(GlobFilter::compile("[", false).is_err());
    /// ```
    pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let mut filter = GlobFilter::default();
        for sub_pattern in split_sub_patterns(pattern) {
            let (is_exclusion, body) = match sub_pattern.strip_prefix('!') {
                Some(rest) => (true, rest.trim()),
                None => (false, sub_pattern),
            };
            if body.is_empty() {
                continue;
            }
            let matcher = GlobBuilder::new(body)
                .literal_separator(true)
                .backslash_escape(true)
                .case_insensitive(!case_sensitive)
                .build()
                .map_err(|e| Error::InvalidPattern {
                    mode: FilterMode::Glob,
                    pattern: body.to_string(),
                    reason: e.kind().to_string(),
                })?
                .compile_matcher();
            let entry = GlobEntry {
                matcher,
                match_base: !body.contains('/'),
            };
            if is_exclusion {
                filter.excludes.push(entry);
            } else {
                filter.includes.push(entry);
            }
        }
        debug!(
            "Compiled glob filter '{}': {} inclusions, {} exclusions",
            pattern,
            filter.includes.len(),
            filter.excludes.len()
        );
        Ok(filter)
    }

    /// Returns `true` if the filter has no sub-patterns and therefore passes everything.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Number of inclusion sub-patterns.
    pub fn inclusion_count(&self) -> usize {
        self.includes.len()
    }

    /// Number of exclusion sub-patterns.
    pub fn exclusion_count(&self) -> usize {
        self.excludes.len()
    }

    /// Tests a single record.
    pub fn is_match(&self, record: &PathRecord) -> bool {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|entry| entry.is_match(record));
        included && !self.excludes.iter().any(|entry| entry.is_match(record))
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

/// Applies a glob expression to `records`.
///
/// An invalid pattern yields an empty result rather than an error.
pub fn apply(records: &[PathRecord], options: &FilterOptions) -> Vec<PathRecord> {
    match GlobFilter::compile(&options.pattern, options.case_sensitive) {
        Ok(filter) => filter.filter(records, options.max_results),
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}

/// Returns `true` if every sub-pattern of `pattern` compiles.
pub fn is_valid(pattern: &str) -> bool {
    GlobFilter::compile(pattern, false).is_ok()
}

/// Splits on commas that are not inside `{...}`, trimming and dropping empties.
pub(crate) fn split_sub_patterns(pattern: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut escaped = false;
    let mut start = 0;
    for (i, c) in pattern.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&pattern[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&pattern[start..]);
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
