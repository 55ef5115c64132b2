//! Time-bounded caching for ignore-pattern lists.
//!
//! Ignore files are an I/O boundary; their parsed patterns can be reused
//! between filtering passes until they expire or are invalidated explicitly
//! (workspace change, manual refresh).

use crate::constants::IGNORE_CACHE_TTL;
use crate::filtering::IgnorePattern;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A map whose entries expire `ttl` after insertion.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Creates an empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the value for `key` if present and not expired at `now`.
    pub fn get_at(&mut self, key: &K, now: Instant) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some((inserted, value)) if now.saturating_duration_since(*inserted) < self.ttl => {
                return Some(value.clone())
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Returns the value for `key` if present and not expired.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Stores `value`, stamping it with `now`. Entries already expired at `now` are dropped.
    pub fn insert_at(&mut self, key: K, value: V, now: Instant) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, (inserted, _)| now.saturating_duration_since(*inserted) < ttl);
        self.entries.insert(key, (now, value));
    }

    /// Stores `value`, stamping it with the current time.
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Drops every entry for which `predicate` returns `true`.
    pub fn invalidate_where<F: FnMut(&K) -> bool>(&mut self, mut predicate: F) {
        self.entries.retain(|key, _| !predicate(key));
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifies a cached pattern list: one workspace under one option set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// The workspace root the ignore files were read from.
    pub workspace_root: PathBuf,
    /// Hash of the options that affect which patterns are loaded.
    pub options_hash: u64,
}

impl CacheKey {
    /// Builds a key from the workspace root and the ignore file names in effect.
    pub fn new<S: AsRef<str>>(workspace_root: &Path, ignore_files: &[S]) -> Self {
        let mut hasher = DefaultHasher::new();
        for name in ignore_files {
            name.as_ref().hash(&mut hasher);
        }
        Self {
            workspace_root: workspace_root.to_path_buf(),
            options_hash: hasher.finish(),
        }
    }
}

/// Cache of resolved ignore patterns, keyed per workspace and option set.
///
/// # Examples
///
/// ```
/// use pathsift::cache::{CacheKey, IgnoreCache};
/// use pathsift::filtering::resolve_ignore_patterns;
/// use std::path::Path;
/// use std::sync::Arc;
///
/// let mut cache = IgnoreCache::default();
/// let key = CacheKey::new(Path::new("/ws"), &[".gitignore"]);
/// let patterns = Arc::new(resolve_ignore_patterns([(".gitignore", "target/\n")]));
///
/// cache.insert(key.clone(), patterns);
/// assert_eq!(cache.get(&key).map(|p| p.len()), Some(1));
///
/// cache.invalidate_workspace(Path::new("/ws"));
/// assert!(cache.get(&key).is_none());
/// ```
#[derive(Debug)]
pub struct IgnoreCache {
    inner: TtlCache<CacheKey, Arc<Vec<IgnorePattern>>>,
}

impl IgnoreCache {
    /// Creates a cache with a custom time-to-live.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: TtlCache::new(ttl),
        }
    }

    /// Returns the cached patterns for `key`, if still fresh.
    pub fn get(&mut self, key: &CacheKey) -> Option<Arc<Vec<IgnorePattern>>> {
        let hit = self.inner.get(key);
        debug!(
            "Ignore cache {} for {}",
            if hit.is_some() { "hit" } else { "miss" },
            key.workspace_root.display()
        );
        hit
    }

    /// Stores patterns for `key`.
    pub fn insert(&mut self, key: CacheKey, patterns: Arc<Vec<IgnorePattern>>) {
        self.inner.insert(key, patterns);
    }

    /// Returns cached patterns for `key`, or loads, stores and returns them.
    pub fn get_or_load<F>(&mut self, key: CacheKey, load: F) -> Arc<Vec<IgnorePattern>>
    where
        F: FnOnce() -> Vec<IgnorePattern>,
    {
        if let Some(patterns) = self.get(&key) {
            return patterns;
        }
        let patterns = Arc::new(load());
        self.insert(key, Arc::clone(&patterns));
        patterns
    }

    /// Drops every entry for `workspace_root` (workspace folder changed).
    pub fn invalidate_workspace(&mut self, workspace_root: &Path) {
        self.inner
            .invalidate_where(|key| key.workspace_root == workspace_root);
    }

    /// Drops everything (manual refresh).
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for IgnoreCache {
    fn default() -> Self {
        Self::with_ttl(IGNORE_CACHE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_expires_after_ttl() {
        let mut cache = TtlCache::new(Duration::from_secs(10));
        let start = Instant::now();
        cache.insert_at("k", 1, start);
        assert_eq!(cache.get_at(&"k", start + Duration::from_secs(9)), Some(1));
        assert_eq!(cache.get_at(&"k", start + Duration::from_secs(10)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_prunes_expired_entries() {
        let mut cache = TtlCache::new(Duration::from_secs(10));
        let start = Instant::now();
        cache.insert_at("stale", 1, start);
        cache.insert_at("fresh", 2, start + Duration::from_secs(5));
        assert_eq!(cache.len(), 2);

        // "stale" is never read again, but the next insert drops it.
        cache.insert_at("new", 3, start + Duration::from_secs(12));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_at(&"fresh", start + Duration::from_secs(12)), Some(2));
        assert_eq!(cache.get_at(&"stale", start + Duration::from_secs(12)), None);
    }

    #[test]
    fn test_invalidate_where() {
        let mut cache = TtlCache::new(Duration::from_secs(60));
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.invalidate_where(|k| *k == "a");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"b"), Some(2));
    }

    #[test]
    fn test_key_depends_on_options() {
        let root = Path::new("/ws");
        assert_eq!(
            CacheKey::new(root, &[".gitignore"]),
            CacheKey::new(root, &[".gitignore"])
        );
        assert_ne!(
            CacheKey::new(root, &[".gitignore"]),
            CacheKey::new(root, &[".gitignore", ".prettierignore"])
        );
    }

    #[test]
    fn test_get_or_load_loads_once() {
        let mut cache = IgnoreCache::default();
        let key = CacheKey::new(Path::new("/ws"), &[".gitignore"]);
        let mut loads = 0;
        for _ in 0..3 {
            cache.get_or_load(key.clone(), || {
                loads += 1;
                Vec::new()
            });
        }
        assert_eq!(loads, 1);
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let mut cache = IgnoreCache::with_ttl(Duration::ZERO);
        let key = CacheKey::new(Path::new("/ws"), &[".gitignore"]);
        cache.insert(key.clone(), Arc::new(Vec::new()));
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_invalidate_workspace_keeps_others() {
        let mut cache = IgnoreCache::default();
        let a = CacheKey::new(Path::new("/a"), &[".gitignore"]);
        let b = CacheKey::new(Path::new("/b"), &[".gitignore"]);
        cache.insert(a.clone(), Arc::new(Vec::new()));
        cache.insert(b.clone(), Arc::new(Vec::new()));
        cache.invalidate_workspace(Path::new("/a"));
        assert!(cache.get(&a).is_none());
        assert!(cache.get(&b).is_some());
    }
}
