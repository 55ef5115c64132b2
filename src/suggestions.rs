//! Advisory, UI-facing helpers: example patterns per mode and a plain-language
//! explanation of what a pattern will do.

use crate::core_types::FilterMode;
use crate::filtering::glob_filter::split_sub_patterns;
use crate::filtering::{is_valid, parse_regex_pattern};

const GLOB_SUGGESTIONS: &[&str] = &[
    "*.ts",
    "**/*.{js,ts}",
    "src/**/*.rs",
    "*.md, !README.md",
    "**/test/**",
    "!**/*.spec.ts",
    "*.{json,yaml,yml}",
];

const REGEX_SUGGESTIONS: &[&str] = &[
    r"\.tsx?$",
    r"^src/",
    r"test|spec",
    r"/readme/i",
    r"^[A-Z].*\.md$",
    r"\.(png|jpe?g|gif|svg)$",
];

const FUZZY_SUGGESTIONS: &[&str] = &["readme", "index", "config", "main", "test"];

/// Example patterns for `mode`.
pub fn pattern_suggestions(mode: FilterMode) -> &'static [&'static str] {
    match mode {
        FilterMode::Glob => GLOB_SUGGESTIONS,
        FilterMode::Regex => REGEX_SUGGESTIONS,
        FilterMode::Fuzzy => FUZZY_SUGGESTIONS,
    }
}

/// Describes in plain language how `pattern` will be applied under `mode`.
///
/// # Examples
///
/// ```
/// use pathsift::core_types::FilterMode;
/// use pathsift::suggestions::explain_pattern;
///
/// let text = explain_pattern("*.ts, !*.spec.ts", FilterMode::Glob);
/// assert!(text.starts_with("Include files matching *.ts"));
/// assert!(text.contains("exclude"));
/// ```
pub fn explain_pattern(pattern: &str, mode: FilterMode) -> String {
    if pattern.trim().is_empty() {
        return "No pattern: every file is shown.".to_string();
    }
    if !is_valid(pattern, mode) {
        return format!("Invalid {} pattern: '{}'.", mode, pattern);
    }
    match mode {
        FilterMode::Glob => explain_glob(pattern),
        FilterMode::Regex => explain_regex(pattern),
        FilterMode::Fuzzy => format!(
            "Files whose name or path contains the letters of '{}' in order, best matches first.",
            pattern.trim()
        ),
    }
}

fn explain_glob(pattern: &str) -> String {
    let (excludes, includes): (Vec<&str>, Vec<&str>) = split_sub_patterns(pattern)
        .into_iter()
        .partition(|p| p.starts_with('!'));
    let excludes: Vec<&str> = excludes
        .iter()
        .map(|p| p.trim_start_matches('!').trim())
        .collect();
    let mut parts = Vec::new();
    if includes.is_empty() {
        parts.push("include every file".to_string());
    } else {
        parts.push(format!("include files matching {}", includes.join(" or ")));
    }
    if !excludes.is_empty() {
        parts.push(format!("exclude files matching {}", excludes.join(" or ")));
    }
    let mut text = parts.join(", then ");
    if let Some(first) = text.get(0..1) {
        text = first.to_uppercase() + &text[1..];
    }
    text.push('.');
    text
}

fn explain_regex(pattern: &str) -> String {
    let Ok((expr, flags)) = parse_regex_pattern(pattern) else {
        return format!("Invalid regex pattern: '{}'.", pattern);
    };
    let mut text = format!(
        "Files whose relative path or file name matches the regular expression {}",
        expr
    );
    if flags.ignore_case {
        text.push_str(", ignoring case");
    }
    if flags.sticky {
        text.push_str(", anchored at the start");
    }
    text.push('.');
    text
}
