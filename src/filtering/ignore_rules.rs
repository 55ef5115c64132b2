// src/filtering/ignore_rules.rs

use log::{debug, trace};
use regex::Regex;

/// One rule parsed from an ignore file.
///
/// Order matters: a later rule overrides the verdict of an earlier one, which
/// is how a negated rule (`!pattern`) re-includes a previously ignored path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgnorePattern {
    /// The slash-normalized pattern text, without the `!` marker.
    pub pattern: String,
    /// The ignore file this rule came from (e.g. `.gitignore`).
    pub source_file: String,
    /// Whether the rule un-ignores matching paths.
    pub negated: bool,
}

/// Parses ignore-file contents into an ordered pattern list.
///
/// Sources are consumed in the order given, and lines within each source in
/// file order. Blank lines and `#` comments are skipped; a leading `!` marks a
/// negated rule. Backslashes are normalized to forward slashes.
///
/// # Examples
///
/// ```
/// use pathsift::filtering::resolve_ignore_patterns;
///
/// let patterns = resolve_ignore_patterns([(".gitignore", "# build output\nbuild/\n!build/keep.txt\n")]);
/// assert_eq!(patterns.len(), 2);
/// assert_eq!(patterns[0].pattern, "build/");
/// assert!(patterns[1].negated);
/// assert_eq!(patterns[1].pattern, "build/keep.txt");
/// ```
pub fn resolve_ignore_patterns<'a, I>(sources: I) -> Vec<IgnorePattern>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut patterns = Vec::new();
    for (source_file, text) in sources {
        let before = patterns.len();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (negated, body) = match line.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            if body.is_empty() {
                continue;
            }
            patterns.push(IgnorePattern {
                pattern: body.replace('\\', "/"),
                source_file: source_file.to_string(),
                negated,
            });
        }
        debug!(
            "Parsed {} ignore patterns from '{}'",
            patterns.len() - before,
            source_file
        );
    }
    patterns
}

/// Decides whether `relative_path` is ignored by `patterns`.
///
/// Every pattern is evaluated in order; each match sets the verdict to
/// `!negated`, so the last matching rule wins. This compiles wildcard rules on
/// every call; use [`IgnoreRules`] when testing many paths against one list.
pub fn is_ignored(relative_path: &str, patterns: &[IgnorePattern]) -> bool {
    IgnoreRules::new(patterns).is_ignored(relative_path)
}

/// How a single ignore pattern is tested against a path.
#[derive(Debug, Clone)]
enum RuleKind {
    /// `dir/`: the directory itself or anything below it, from the root.
    Directory(String),
    /// Contains `*`: anchored regex where `*` spans any characters, `/` included.
    Wildcard(Regex),
    /// `/path`: exact or path-prefix match from the workspace root.
    Anchored(String),
    /// Bare name: exact or path-prefix match at any directory depth.
    Floating(String),
}

#[derive(Debug, Clone)]
struct Rule {
    kind: RuleKind,
    negated: bool,
}

/// A pattern list compiled once for a filtering pass.
///
/// Wildcard translation is deliberately simple: only `*` is special and it
/// crosses `/`. There is no `**`, brace or character-class support here.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<Rule>,
}

impl IgnoreRules {
    /// Compiles `patterns`. Rules whose wildcard translation fails are skipped.
    pub fn new(patterns: &[IgnorePattern]) -> Self {
        let rules = patterns
            .iter()
            .filter_map(|p| {
                compile_rule(&p.pattern).map(|kind| Rule {
                    kind,
                    negated: p.negated,
                })
            })
            .collect();
        Self { rules }
    }

    /// Returns `true` if no rules were compiled.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order and returns the final verdict.
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        let mut ignored = false;
        for rule in &self.rules {
            if rule.kind.matches(relative_path) {
                ignored = !rule.negated;
            }
        }
        trace!("Ignore verdict for '{}': {}", relative_path, ignored);
        ignored
    }
}

fn compile_rule(pattern: &str) -> Option<RuleKind> {
    if pattern.ends_with('/') {
        let dir = pattern.trim_start_matches('/').trim_end_matches('/');
        if dir.is_empty() {
            return None;
        }
        return Some(RuleKind::Directory(dir.to_string()));
    }
    if pattern.contains('*') {
        let translated = format!("^{}$", regex::escape(pattern).replace(r"\*", ".*"));
        return match Regex::new(&translated) {
            Ok(re) => Some(RuleKind::Wildcard(re)),
            Err(e) => {
                log::warn!("Skipping ignore pattern '{}': {}", pattern, e);
                None
            }
        };
    }
    if let Some(rest) = pattern.strip_prefix('/') {
        if rest.is_empty() {
            return None;
        }
        return Some(RuleKind::Anchored(rest.to_string()));
    }
    Some(RuleKind::Floating(pattern.to_string()))
}

impl RuleKind {
    fn matches(&self, path: &str) -> bool {
        match self {
            RuleKind::Directory(dir) | RuleKind::Anchored(dir) => is_same_or_under(path, dir),
            RuleKind::Wildcard(re) => re.is_match(path),
            RuleKind::Floating(name) => suffixes(path).any(|suffix| is_same_or_under(suffix, name)),
        }
    }
}

/// `path == prefix` or `path` starts with `prefix/`.
fn is_same_or_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Yields `a/b/c`, `b/c`, `c` for `a/b/c`.
fn suffixes(path: &str) -> impl Iterator<Item = &str> {
    std::iter::once(path).chain(path.match_indices('/').map(move |(i, _)| &path[i + 1..]))
}
