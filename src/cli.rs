// src/cli.rs

use crate::core_types::FilterMode;
use clap::Parser;
use std::str::FromStr;

/// Filter a workspace's files by glob, regular expression, or fuzzy query.
///
/// pathsift walks the given root, drops files excluded by the workspace's ignore
/// files (e.g. .gitignore), and prints the relative paths that match PATTERN,
/// one per line. Fuzzy results are printed best match first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace root to enumerate.
    #[arg(default_value = ".")]
    pub root: String,

    /// Pattern to filter by. Empty (the default) lists every file.
    #[arg(default_value = "")]
    pub pattern: String,

    // --- Matching Options ---
    /// Match discipline: glob, regex or fuzzy.
    #[arg(short = 'M', long, value_name = "MODE", value_parser = FilterMode::from_str)]
    pub mode: Option<FilterMode>,

    /// Match letter case exactly (default is case-insensitive).
    #[arg(short = 'c', long, action = clap::ArgAction::SetTrue)]
    pub case_sensitive: bool,

    /// Maximum number of results to print.
    #[arg(short = 'm', long, value_name = "COUNT")]
    pub max_results: Option<usize>,

    // --- Ignore Options ---
    /// Do not apply ignore-file exclusions.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_ignore: bool,

    /// Ignore file names to read from the root, in precedence order (repeatable).
    #[arg(short = 'i', long = "ignore-file", value_name = "NAME", num_args = 1..)]
    pub ignore_files: Option<Vec<String>>,

    // --- Enumeration Options ---
    /// Maximum directory depth to descend.
    #[arg(short = 'd', long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links while walking.
    #[arg(short = 'L', long, action = clap::ArgAction::SetTrue)]
    pub follow_links: bool,

    /// Include hidden files and directories.
    #[arg(short = 'H', long, action = clap::ArgAction::SetTrue)]
    pub hidden: bool,

    /// Include directories in the candidate set.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub include_dirs: bool,

    // --- Output Options ---
    /// Print a description of the pattern instead of filtering.
    #[arg(short = 'e', long, action = clap::ArgAction::SetTrue)]
    pub explain: bool,

    /// Print example patterns for the selected mode and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub suggest: bool,

    #[cfg(feature = "serde")]
    /// Print matching records as JSON.
    #[arg(short = 'j', long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    #[cfg(feature = "serde")]
    /// Load settings from a JSON file; command-line flags take precedence.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<String>,
}
