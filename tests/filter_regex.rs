// tests/filter_regex.rs

mod common;

use common::{records, relative_paths};
use pathsift::core_types::{FilterMode, FilterOptions};
use pathsift::errors::Error;
use pathsift::filtering::{is_valid, RegexFilter};
use pathsift::filter;
use std::time::Duration;

#[test]
fn test_path_regex_filter() {
    let input = records(&["src/main.rs", "src/lib.rs", "tests/integration.rs", "README.md"]);
    let outcome = filter(
        &input,
        &FilterOptions::new(r"^src/.*\.rs$", FilterMode::Regex),
    );
    assert_eq!(relative_paths(&outcome.records), vec!["src/main.rs", "src/lib.rs"]);
}

#[test]
fn test_name_alone_can_match() {
    // `^lib` fails on the relative path but succeeds on the file name.
    let input = records(&["src/lib.rs", "src/main.rs"]);
    let outcome = filter(&input, &FilterOptions::new("^lib", FilterMode::Regex));
    assert_eq!(relative_paths(&outcome.records), vec!["src/lib.rs"]);
}

#[test]
fn test_wrapped_form_with_flags() {
    let input = records(&["docs/README.md", "docs/readme.txt", "src/main.rs"]);

    let options = FilterOptions::new("/^readme/i", FilterMode::Regex).case_sensitive(true);
    let outcome = filter(&input, &options);
    assert_eq!(
        relative_paths(&outcome.records),
        vec!["docs/README.md", "docs/readme.txt"]
    );

    let options = FilterOptions::new("/^readme/", FilterMode::Regex).case_sensitive(true);
    let outcome = filter(&input, &options);
    assert_eq!(relative_paths(&outcome.records), vec!["docs/readme.txt"]);
}

#[test]
fn test_slashes_without_valid_flags_are_a_bare_expression() {
    // `/src/x` is not the wrapped form, so the slashes are literal.
    let input = records(&["a/src/x.rs", "src/y.rs"]);
    let outcome = filter(&input, &FilterOptions::new("/src/x", FilterMode::Regex));
    assert_eq!(relative_paths(&outcome.records), vec!["a/src/x.rs"]);
}

#[test]
fn test_invalid_regex_yields_empty_and_error() {
    let input = records(&["a.rs"]);
    let outcome = filter(&input, &FilterOptions::new("[a-", FilterMode::Regex));
    assert!(outcome.records.is_empty());
    assert!(matches!(
        outcome.error,
        Some(Error::InvalidPattern {
            mode: FilterMode::Regex,
            ..
        })
    ));
    assert!(!is_valid("[a-", FilterMode::Regex));
    assert!(!is_valid("/abc/ii", FilterMode::Regex));
    assert!(is_valid("", FilterMode::Regex));
}

#[test]
fn test_exhausted_budget_counts_as_non_match() {
    let input = records(&["a.rs"]);
    let matcher = RegexFilter::compile("a", false)
        .unwrap()
        .with_budget(Duration::ZERO);
    assert!(matches!(
        matcher.try_match(&input[0]),
        Err(Error::MatchTimeout { .. })
    ));
    assert!(matcher.filter(&input, 10).is_empty());
}
