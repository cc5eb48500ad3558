//! Session cache of clean tables keyed by source path
//!
//! The source file is treated as static for the life of the cache, so
//! entries are never invalidated implicitly. Callers own the cache and pass
//! it to whatever needs the table; there is no process-wide instance.

use crate::loader::load;
use crate::table::CleanTable;
use review_core::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct Entries {
    /// Tables keyed by canonical path
    tables: HashMap<PathBuf, Arc<CleanTable>>,
    /// Path as the caller spelled it -> key in `tables`
    aliases: HashMap<PathBuf, PathBuf>,
}

impl Entries {
    /// A spelling seen before keeps its key even after the file is gone.
    fn key(&self, path: &Path) -> PathBuf {
        match self.aliases.get(path) {
            Some(key) => key.clone(),
            None => std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
        }
    }
}

/// Loads each source file once and hands out shared read-only tables
///
/// Different spellings of the same existing file (`./a.csv`, `a.csv`, an
/// absolute path) share one entry.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: Mutex<Entries>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the clean table for `path`, running the pipeline on first use.
    ///
    /// A failed load is returned as an error and leaves no entry behind.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<CleanTable>> {
        self.get_or_load_with(path, |p| load(p))
    }

    /// Like [`get_or_load`](Self::get_or_load) with a custom loader.
    ///
    /// The lock is held while `loader` runs, so concurrent callers for the
    /// same path wait for the one load instead of repeating it.
    pub fn get_or_load_with<F>(&self, path: impl AsRef<Path>, loader: F) -> Result<Arc<CleanTable>>
    where
        F: FnOnce(&Path) -> Result<CleanTable>,
    {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let key = entries.key(path);

        if let Some(table) = entries.tables.get(&key).cloned() {
            entries.aliases.insert(path.to_path_buf(), key);
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(path = %path.display(), "table cache hit");
            return Ok(table);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(path = %path.display(), "table cache miss");
        let table = Arc::new(loader(path)?);
        entries.aliases.insert(path.to_path_buf(), key.clone());
        entries.tables.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Whether a table for `path` is already cached
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.tables.contains_key(&entries.key(path.as_ref()))
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tables
            .len();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }

    /// Drop all cached tables and reset statistics
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.tables.clear();
        entries.aliases.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
