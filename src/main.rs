// src/main.rs

use anyhow::Result;
use clap::Parser;
use pathsift::cache::IgnoreCache;
use pathsift::cli::Cli;
use pathsift::config::{ConfigBuilder, FilterSettings};
use pathsift::suggestions::{explain_pattern, pattern_suggestions};
use pathsift::workspace::ScanOptions;
use pathsift::{execute, FilterOutcome};
use std::io::{self, Write};
use std::path::Path;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "pathsift=debug".parse().unwrap()
                } else {
                    "pathsift=info".parse().unwrap()
                },
            ),
        )
        .init();

    log::debug!("Starting pathsift v{}...", env!("CARGO_PKG_VERSION"));

    // --- Setup ---
    let cli = Cli::parse();
    let settings = ConfigBuilder::from_cli_with_base(&cli, load_base_settings(&cli)?).build()?;
    let mode = cli.mode.unwrap_or(settings.default_mode);

    if cli.suggest {
        for example in pattern_suggestions(mode) {
            println!("{}", example);
        }
        return Ok(());
    }
    if cli.explain {
        println!("{}", explain_pattern(&cli.pattern, mode));
        return Ok(());
    }

    // --- Execution ---
    let scan_options = ScanOptions {
        max_depth: cli.max_depth,
        follow_links: cli.follow_links,
        include_hidden: cli.hidden,
        include_dirs: cli.include_dirs,
    };
    let options = settings.options_with_mode(&cli.pattern, mode);
    let mut cache = IgnoreCache::default();
    let outcome = execute(
        Path::new(&cli.root),
        &settings,
        &scan_options,
        &options,
        &mut cache,
    )?;

    // --- Error Handling ---
    if let Some(message) = outcome.error_message() {
        eprintln!("pathsift: {}", message);
        std::process::exit(1);
    }

    write_outcome(&cli, &outcome)?;
    Ok(())
}

#[cfg(feature = "serde")]
fn load_base_settings(cli: &Cli) -> Result<FilterSettings> {
    use anyhow::Context;
    match &cli.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file '{}'", path))?;
            FilterSettings::from_json(&text)
        }
        None => Ok(FilterSettings::default()),
    }
}

#[cfg(not(feature = "serde"))]
fn load_base_settings(_cli: &Cli) -> Result<FilterSettings> {
    Ok(FilterSettings::default())
}

fn write_outcome(cli: &Cli, outcome: &FilterOutcome) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    #[cfg(feature = "serde")]
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &outcome.records)?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }
    #[cfg(not(feature = "serde"))]
    let _ = cli;

    for record in &outcome.records {
        writeln!(out, "{}", record.relative_path)?;
    }
    out.flush()?;
    Ok(())
}
