// src/constants.rs

use std::time::Duration;

/// Default cap on the number of records a filtering pass returns.
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Wall-clock budget for a single regex test before the file counts as non-matching.
pub const REGEX_MATCH_BUDGET: Duration = Duration::from_millis(1000);

/// Upper bound on compiled regex program size, in bytes.
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// How long a cached ignore-pattern list stays valid.
pub const IGNORE_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Default quiescence window before re-filtering after input, in milliseconds.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;

/// Minimum interval between refreshes triggered by file-system change events.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Ignore files consulted when none are configured.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[".gitignore"];

/// Ignore file names the settings layer recognizes out of the box.
pub const KNOWN_IGNORE_FILES: &[&str] = &[".gitignore", ".eslintignore", ".prettierignore"];

// Fuzzy scoring weights. Name hits outrank the equivalent path hit.
pub const FUZZY_EXACT_NAME: f64 = 100.0;
pub const FUZZY_EXACT_PATH: f64 = 90.0;
pub const FUZZY_PREFIX_NAME: f64 = 80.0;
pub const FUZZY_PREFIX_PATH: f64 = 70.0;
pub const FUZZY_SUBSTRING_NAME: f64 = 50.0;
pub const FUZZY_SUBSTRING_PATH: f64 = 40.0;
pub const FUZZY_SUBSEQUENCE_NAME: f64 = 20.0;
pub const FUZZY_SUBSEQUENCE_PATH: f64 = 10.0;

/// Path length at which the fuzzy length bonus reaches zero.
pub const FUZZY_LENGTH_BONUS_SPAN: f64 = 100.0;
