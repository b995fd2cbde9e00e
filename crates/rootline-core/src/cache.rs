//! Per-file dependency cache

use crate::model::Dependency;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::path::{Path, PathBuf};

/// Dependency lists keyed by file path. Thread-safe for concurrent access.
///
/// Entries live as long as the cache; nothing invalidates them when the file
/// changes on disk.
#[derive(Debug, Default)]
pub struct DependencyCache {
    entries: DashMap<PathBuf, Vec<Dependency>>,
}

impl DependencyCache {
    pub fn new() -> Self {
        DependencyCache {
            entries: DashMap::new(),
        }
    }

    /// Look up a previously stored list.
    pub fn get(&self, path: &Path) -> Option<Vec<Dependency>> {
        self.entries.get(path).map(|r| r.value().clone())
    }

    /// Store a list, overwriting any previous one.
    pub fn set(&self, path: PathBuf, dependencies: Vec<Dependency>) {
        self.entries.insert(path, dependencies);
    }

    /// Store a list unless one is already present, and return the stored one.
    ///
    /// When two workers race on the same path the first writer wins and both
    /// observe its list.
    pub fn insert_if_absent(&self, path: PathBuf, dependencies: Vec<Dependency>) -> Vec<Dependency> {
        match self.entries.entry(path) {
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => slot.insert(dependencies).value().clone(),
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
