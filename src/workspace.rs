//! Collaborators at the I/O boundary: enumerating a workspace into
//! `PathRecord`s and reading ignore files.
//!
//! The filtering core never touches the filesystem; these helpers feed it.

use crate::cache::{CacheKey, IgnoreCache};
use crate::core_types::PathRecord;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::{resolve_ignore_patterns, IgnorePattern};
use ignore::WalkBuilder;
use log::{debug, info, trace, warn};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Options controlling workspace enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum depth below the root; `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Whether symbolic links are followed.
    pub follow_links: bool,
    /// Whether hidden entries (dot-files) are included.
    pub include_hidden: bool,
    /// Whether directories are emitted as records alongside files.
    pub include_dirs: bool,
}

/// Walks `root` and returns one record per entry, sorted by relative path.
///
/// The walker's own ignore-file handling is disabled: ignore rules are applied
/// by the filtering core so that every mode sees the same semantics. The `.git`
/// directory is always skipped. Entries whose metadata cannot be read are kept
/// with absent size and modification time.
///
/// The root is canonicalized first, so `absolute_path` is absolute even when
/// `root` is relative (e.g. `.`).
///
/// # Errors
/// Returns `Error::Io` if `root` is not an accessible directory.
pub fn scan_workspace(root: &Path, options: &ScanOptions) -> Result<Vec<PathRecord>> {
    let root = fs::canonicalize(root).map_err(|e| io_error_with_path(e, root))?;
    let root = root.as_path();
    let root_metadata = fs::metadata(root).map_err(|e| io_error_with_path(e, root))?;
    if !root_metadata.is_dir() {
        return Err(io_error_with_path(
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            root,
        ));
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.include_hidden)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .filter_entry(|entry| entry.file_name() != ".git");
    debug!("Scanning workspace {} with {:?}", root.display(), options);

    let mut records = Vec::new();
    for entry_result in builder.build() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Walker error: {}", e);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let is_directory = entry.file_type().is_some_and(|t| t.is_dir());
        if is_directory && !options.include_dirs {
            continue;
        }
        let (size_bytes, modified_at) = match entry.metadata() {
            Ok(md) => (
                (!md.is_dir()).then(|| md.len()),
                md.modified().ok(),
            ),
            Err(e) => {
                trace!("No metadata for {}: {}", entry.path().display(), e);
                (None, None)
            }
        };
        records.push(
            PathRecord::ingest(root, entry.path(), is_directory)
                .with_metadata(size_bytes, modified_at),
        );
    }

    records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!("Scan found {} records under {}", records.len(), root.display());
    Ok(records)
}

/// Reads one ignore file. A missing file is `Ok(None)`.
///
/// # Errors
/// Returns `Error::IgnoreFileUnreadable` if the file exists but cannot be read.
pub fn read_ignore_file(root: &Path, name: &str) -> Result<Option<String>> {
    let path = root.join(name);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::IgnoreFileUnreadable {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Reads the named ignore files from `root`, in order.
///
/// Missing and unreadable files contribute nothing; unreadable ones are
/// logged at info level.
pub fn read_ignore_files<S: AsRef<str>>(root: &Path, names: &[S]) -> Vec<(String, String)> {
    names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match read_ignore_file(root, name) {
                Ok(Some(text)) => Some((name.to_string(), text)),
                Ok(None) => {
                    debug!("Ignore file '{}' not present", name);
                    None
                }
                Err(e) => {
                    info!("{}", e);
                    None
                }
            }
        })
        .collect()
}

/// Returns the resolved ignore patterns for `root`, consulting `cache` first.
pub fn load_ignore_patterns<S: AsRef<str>>(
    root: &Path,
    names: &[S],
    cache: &mut IgnoreCache,
) -> Arc<Vec<IgnorePattern>> {
    let key = CacheKey::new(root, names);
    cache.get_or_load(key, || {
        let sources = read_ignore_files(root, names);
        resolve_ignore_patterns(
            sources
                .iter()
                .map(|(name, text)| (name.as_str(), text.as_str())),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scan_relative_paths_and_metadata() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("src/nested"))?;
        fs::write(temp.path().join("src/nested/a.rs"), "12345")?;
        fs::write(temp.path().join("b.txt"), "")?;

        let records = scan_workspace(temp.path(), &ScanOptions::default())?;
        let paths: Vec<&str> = records.iter().map(|r| r.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["b.txt", "src/nested/a.rs"]);
        assert_eq!(records[1].name, "a.rs");
        assert_eq!(records[1].size_bytes, Some(5));
        assert!(records[1].modified_at.is_some());
        Ok(())
    }

    #[test]
    fn test_scan_hidden_and_dirs() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join(".config"))?;
        fs::write(temp.path().join(".config/settings.json"), "{}")?;
        fs::write(temp.path().join("visible.txt"), "")?;

        let default_scan = scan_workspace(temp.path(), &ScanOptions::default())?;
        assert_eq!(default_scan.len(), 1);

        let options = ScanOptions {
            include_hidden: true,
            include_dirs: true,
            ..Default::default()
        };
        let full_scan = scan_workspace(temp.path(), &options)?;
        let paths: Vec<&str> = full_scan.iter().map(|r| r.relative_path.as_str()).collect();
        assert_eq!(paths, vec![".config", ".config/settings.json", "visible.txt"]);
        assert!(full_scan[0].is_directory);
        assert!(full_scan[0].size_bytes.is_none());
        Ok(())
    }

    #[test]
    fn test_scan_skips_git_dir_and_respects_depth() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join(".git"))?;
        fs::write(temp.path().join(".git/HEAD"), "ref")?;
        fs::create_dir_all(temp.path().join("a/b"))?;
        fs::write(temp.path().join("a/b/deep.txt"), "")?;
        fs::write(temp.path().join("top.txt"), "")?;

        let options = ScanOptions {
            include_hidden: true,
            max_depth: Some(1),
            ..Default::default()
        };
        let records = scan_workspace(temp.path(), &options)?;
        let paths: Vec<&str> = records.iter().map(|r| r.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["top.txt"]);
        Ok(())
    }

    #[test]
    fn test_scan_relative_root_yields_absolute_paths() -> anyhow::Result<()> {
        let temp = tempfile::Builder::new()
            .prefix("scan_rel_root")
            .tempdir_in(".")?;
        fs::create_dir_all(temp.path().join("src"))?;
        fs::write(temp.path().join("src/a.ts"), "")?;

        let relative_root = Path::new(temp.path().file_name().unwrap());
        assert!(relative_root.is_relative());
        let records = scan_workspace(relative_root, &ScanOptions::default())?;
        assert_eq!(records.len(), 1);
        assert!(records[0].absolute_path.is_absolute());
        assert!(records[0].absolute_path.ends_with("src/a.ts"));
        assert_eq!(records[0].relative_path, "src/a.ts");
        Ok(())
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let temp = tempdir().unwrap();
        let result = scan_workspace(&temp.path().join("missing"), &ScanOptions::default());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_ignore_files_skips_missing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "target/\n")?;
        let sources = read_ignore_files(temp.path(), &[".gitignore", ".eslintignore"]);
        assert_eq!(sources, vec![(".gitignore".to_string(), "target/\n".to_string())]);
        assert!(read_ignore_file(temp.path(), ".eslintignore")?.is_none());
        Ok(())
    }

    #[test]
    fn test_unreadable_ignore_file_contributes_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        // A directory where a file is expected fails with something other than NotFound.
        fs::create_dir_all(temp.path().join(".gitignore"))?;
        fs::write(temp.path().join(".prettierignore"), "dist/\n")?;

        assert!(matches!(
            read_ignore_file(temp.path(), ".gitignore"),
            Err(Error::IgnoreFileUnreadable { .. })
        ));

        let names = [".gitignore", ".prettierignore"];
        let sources = read_ignore_files(temp.path(), &names);
        assert_eq!(
            sources,
            vec![(".prettierignore".to_string(), "dist/\n".to_string())]
        );

        let mut cache = IgnoreCache::default();
        let patterns = load_ignore_patterns(temp.path(), &names, &mut cache);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].source_file, ".prettierignore");
        assert_eq!(patterns[0].pattern, "dist/");
        Ok(())
    }

    #[test]
    fn test_load_ignore_patterns_uses_cache() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "*.log\n")?;
        let mut cache = IgnoreCache::default();

        let first = load_ignore_patterns(temp.path(), &[".gitignore"], &mut cache);
        assert_eq!(first.len(), 1);

        // Served from the cache until invalidated.
        fs::write(temp.path().join(".gitignore"), "*.log\ndist/\n")?;
        let cached = load_ignore_patterns(temp.path(), &[".gitignore"], &mut cache);
        assert_eq!(cached.len(), 1);

        cache.invalidate_workspace(temp.path());
        let reloaded = load_ignore_patterns(temp.path(), &[".gitignore"], &mut cache);
        assert_eq!(reloaded.len(), 2);
        Ok(())
    }
}
