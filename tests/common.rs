// tests/common.rs

use pathsift::core_types::PathRecord;
use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn pathsift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pathsift"))
}

/// Builds in-memory records rooted at `/ws` for the given relative paths.
#[allow(dead_code)]
pub fn records(paths: &[&str]) -> Vec<PathRecord> {
    let root = Path::new("/ws");
    paths
        .iter()
        .map(|p| PathRecord::ingest(root, &root.join(p), false))
        .collect()
}

/// The sample workspace used by the end-to-end scenarios.
#[allow(dead_code)]
pub fn sample_records() -> Vec<PathRecord> {
    records(&[
        "src/file1.ts",
        "src/file2.js",
        "test/test1.spec.ts",
        "docs/README.md",
        "node_modules/lib/index.js",
    ])
}

/// Relative paths of `records`, in order.
#[allow(dead_code)]
pub fn relative_paths(records: &[PathRecord]) -> Vec<&str> {
    records.iter().map(|r| r.relative_path.as_str()).collect()
}

/// Creates a file (and its parent directories) under `root`.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: &str) -> std::io::Result<()> {
    let file_path = root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)
}

/// Materializes the sample workspace on disk, with a `.gitignore` that
/// excludes `node_modules/`.
#[allow(dead_code)]
pub fn create_sample_workspace(root: &Path) -> std::io::Result<()> {
    for path in [
        "src/file1.ts",
        "src/file2.js",
        "test/test1.spec.ts",
        "docs/README.md",
        "node_modules/lib/index.js",
    ] {
        create_file(root, path, "")?;
    }
    create_file(root, ".gitignore", "node_modules/\n")
}
