// src/filtering/fuzzy.rs

use crate::constants::{
    FUZZY_EXACT_NAME, FUZZY_EXACT_PATH, FUZZY_LENGTH_BONUS_SPAN, FUZZY_PREFIX_NAME,
    FUZZY_PREFIX_PATH, FUZZY_SUBSEQUENCE_NAME, FUZZY_SUBSEQUENCE_PATH, FUZZY_SUBSTRING_NAME,
    FUZZY_SUBSTRING_PATH,
};
use crate::core_types::{FilterOptions, MatchResult, PathRecord};
use log::trace;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A prepared fuzzy query.
///
/// Scoring checks both the bare name and the relative path, in tiers:
/// exact equality, prefix, substring, then an in-order subsequence scan. Name
/// hits always outweigh the equivalent path hit. Records with any signal get a
/// small bonus for shorter paths; records with no signal score zero and are
/// dropped.
#[derive(Debug, Clone)]
pub struct FuzzyQuery {
    query: String,
    case_sensitive: bool,
}

impl FuzzyQuery {
    /// Prepares `query`. Surrounding whitespace is not significant.
    pub fn new(query: &str, case_sensitive: bool) -> Self {
        let query = query.trim();
        Self {
            query: fold(query, case_sensitive).into_owned(),
            case_sensitive,
        }
    }

    /// Returns `true` if the query is empty, in which case everything matches.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Scores one record. Zero means "no match".
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::core_types::PathRecord;
    /// use pathsift::filtering::FuzzyQuery;
    /// use std::path::Path;
    ///
    /// let root = Path::new("/ws");
    /// let readme = PathRecord::ingest(root, Path::new("/ws/readme.md"), false);
    /// let other = PathRecord::ingest(root, Path::new("/ws/notreadme.md"), false);
    /// let unrelated = PathRecord::ingest(root, Path::new("/ws/main.rs"), false);
    ///
    /// let query = FuzzyQuery::new("readme", false);
    /// assert!(query.score(&readme) > query.score(&other));
    /// assert_eq!(query.score(&unrelated), 0.0);
    /// ```
    pub fn score(&self, record: &PathRecord) -> f64 {
        if self.query.is_empty() {
            return 0.0;
        }
        let name = fold(&record.name, self.case_sensitive);
        let path = fold(&record.relative_path, self.case_sensitive);
        let q = self.query.as_str();

        let mut score = if name == q {
            FUZZY_EXACT_NAME
        } else if path == q {
            FUZZY_EXACT_PATH
        } else if name.starts_with(q) {
            FUZZY_PREFIX_NAME
        } else if path.starts_with(q) {
            FUZZY_PREFIX_PATH
        } else if name.contains(q) {
            FUZZY_SUBSTRING_NAME
        } else if path.contains(q) {
            FUZZY_SUBSTRING_PATH
        } else {
            0.0
        };

        if let Some(s) = subsequence_score(q, &name) {
            score += s * FUZZY_SUBSEQUENCE_NAME;
        } else if let Some(s) = subsequence_score(q, &path) {
            score += s * FUZZY_SUBSEQUENCE_PATH;
        }

        if score > 0.0 {
            score += length_bonus(record.relative_path.chars().count());
        }
        trace!("Fuzzy score for '{}': {}", record.relative_path, score);
        score
    }

    /// Scores and ranks `records`, keeping at most `max_results`.
    ///
    /// With an empty query every record is returned in input order with a zero score.
    pub fn rank(&self, records: &[PathRecord], max_results: usize) -> Vec<MatchResult> {
        if self.query.is_empty() {
            return records
                .iter()
                .take(max_results)
                .map(|record| MatchResult {
                    record: record.clone(),
                    score: 0.0,
                })
                .collect();
        }
        let mut results: Vec<MatchResult> = records
            .iter()
            .filter_map(|record| {
                let score = self.score(record);
                (score > 0.0).then(|| MatchResult {
                    record: record.clone(),
                    score,
                })
            })
            .collect();
        results.sort_by(compare_results);
        results.truncate(max_results);
        results
    }
}

/// Score descending, then shorter relative path, then lexical order.
fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.record.relative_path.len().cmp(&b.record.relative_path.len()))
        .then_with(|| a.record.relative_path.cmp(&b.record.relative_path))
}

fn fold(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

/// Scans `target` left to right, consuming `query` characters in order.
///
/// Returns `None` unless every query character was consumed. Otherwise the
/// score is `matched_ratio * 0.7 + longest_run_ratio * 0.3`.
pub fn subsequence_score(query: &str, target: &str) -> Option<f64> {
    let query: Vec<char> = query.chars().collect();
    if query.is_empty() {
        return None;
    }
    let mut matched = 0usize;
    let mut run = 0usize;
    let mut longest_run = 0usize;
    for c in target.chars() {
        if matched < query.len() && c == query[matched] {
            matched += 1;
            run += 1;
            longest_run = longest_run.max(run);
        } else {
            run = 0;
        }
    }
    if matched < query.len() {
        return None;
    }
    let len = query.len() as f64;
    Some((matched as f64 / len) * 0.7 + (longest_run as f64 / len) * 0.3)
}

fn length_bonus(path_len: usize) -> f64 {
    (1.0 - path_len as f64 / FUZZY_LENGTH_BONUS_SPAN).max(0.0)
}

/// Ranks `records` against the fuzzy query in `options.pattern`.
pub fn rank(records: &[PathRecord], options: &FilterOptions) -> Vec<MatchResult> {
    FuzzyQuery::new(&options.pattern, options.case_sensitive).rank(records, options.max_results)
}

/// Applies a fuzzy query, returning records in relevance order.
pub fn apply(records: &[PathRecord], options: &FilterOptions) -> Vec<PathRecord> {
    rank(records, options)
        .into_iter()
        .map(|result| result.record)
        .collect()
}

/// Fuzzy queries are always valid.
pub fn is_valid(_pattern: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::FilterMode;
    use std::path::Path;

    fn record(relative: &str) -> PathRecord {
        PathRecord::ingest(Path::new("/ws"), &Path::new("/ws").join(relative), false)
    }

    fn ranked_paths(query: &str, paths: &[&str]) -> Vec<String> {
        let records: Vec<PathRecord> = paths.iter().map(|p| record(p)).collect();
        apply(&records, &FilterOptions::new(query, FilterMode::Fuzzy))
            .into_iter()
            .map(|r| r.relative_path)
            .collect()
    }

    #[test]
    fn test_subsequence_requires_every_char_in_order() {
        assert!(subsequence_score("abc", "a_b_c").is_some());
        assert!(subsequence_score("abc", "acb").is_none());
        assert!(subsequence_score("", "abc").is_none());
    }

    #[test]
    fn test_subsequence_rewards_consecutive_runs() {
        let contiguous = subsequence_score("abc", "xabcx").unwrap();
        let scattered = subsequence_score("abc", "a_b_c").unwrap();
        assert!((contiguous - 1.0).abs() < 1e-9);
        assert!((scattered - (0.7 + 0.1)).abs() < 1e-9);
        assert!(contiguous > scattered);
    }

    #[test]
    fn test_tiers_order() {
        let ranked = ranked_paths(
            "main",
            &["x/remain_x.rs", "src/main", "main.rs", "m_a_i_n.rs"],
        );
        assert_eq!(ranked, vec!["src/main", "main.rs", "x/remain_x.rs", "m_a_i_n.rs"]);
    }

    #[test]
    fn test_exact_beats_substring() {
        let ranked = ranked_paths("readme", &["notreadme.md", "readme.md"]);
        assert_eq!(ranked, vec!["readme.md", "notreadme.md"]);
    }

    #[test]
    fn test_name_subsequence_beats_path_subsequence() {
        let query = FuzzyQuery::new("abc", false);
        let by_name = query.score(&record("zz/a1b2c3.txt"));
        let by_path = query.score(&record("a/b/c.txt"));
        assert!(by_name > by_path);
        assert!(by_path > 0.0);
    }

    #[test]
    fn test_non_matches_are_dropped() {
        assert!(ranked_paths("xyz", &["src/file1.ts", "docs/README.md"]).is_empty());
    }

    #[test]
    fn test_case_folding() {
        let records = vec![record("docs/README.md")];
        let insensitive = FilterOptions::new("readme", FilterMode::Fuzzy);
        assert_eq!(apply(&records, &insensitive).len(), 1);
        let sensitive = insensitive.clone().case_sensitive(true);
        assert!(apply(&records, &sensitive).is_empty());
    }

    #[test]
    fn test_ties_break_on_length_then_lexical() {
        let ranked = ranked_paths("util", &["b/util.rs", "a/util.rs", "util.rs"]);
        assert_eq!(ranked, vec!["util.rs", "a/util.rs", "b/util.rs"]);
    }

    #[test]
    fn test_empty_query_preserves_order_and_caps() {
        let records = vec![record("c"), record("a"), record("b")];
        let options = FilterOptions::new("", FilterMode::Fuzzy).max_results(2);
        let result = apply(&records, &options);
        assert_eq!(result, records[..2].to_vec());
    }

    #[test]
    fn test_cap_is_score_aware() {
        let ranked = {
            let records: Vec<PathRecord> = ["zz/ab.txt", "ab", "a_b"].iter().map(|p| record(p)).collect();
            apply(&records, &FilterOptions::new("ab", FilterMode::Fuzzy).max_results(1))
        };
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].relative_path, "ab");
    }

    #[test]
    fn test_length_bonus() {
        assert!((length_bonus(0) - 1.0).abs() < 1e-9);
        assert!((length_bonus(50) - 0.5).abs() < 1e-9);
        assert_eq!(length_bonus(150), 0.0);
    }
}
