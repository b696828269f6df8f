//! Per-path memoization of resolved properties

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::properties::PropertyTable;

type Slot = Arc<OnceLock<Arc<PropertyTable>>>;

/// Resolved tables keyed by absolute file path.
///
/// Each path owns a slot that is filled exactly once: concurrent lookups of
/// the same path wait on the first computation instead of repeating it.
/// Entries stay until [`invalidate`](Self::invalidate),
/// [`invalidate_prefix`](Self::invalidate_prefix) or [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct ResolutionCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached table for `path`, computing it with `compute` on a miss.
    ///
    /// The map lock is released before `compute` runs.
    pub fn get_or_compute<F>(&self, path: &Path, compute: F) -> Arc<PropertyTable>
    where
        F: FnOnce() -> PropertyTable,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(path.to_path_buf()).or_default())
        };
        Arc::clone(slot.get_or_init(|| Arc::new(compute())))
    }

    /// Cached table for `path`, if one has been computed.
    pub fn get(&self, path: &Path) -> Option<Arc<PropertyTable>> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(path).and_then(|slot| slot.get().cloned())
    }

    /// Drop the entry for one file. Returns whether an entry existed.
    pub fn invalidate(&self, path: &Path) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path)
            .is_some()
    }

    /// Drop every entry for files under `dir`. Returns the number removed.
    ///
    /// Use this when a config file in `dir` changes, since it can affect
    /// every file below it.
    pub fn invalidate_prefix(&self, dir: &Path) -> usize {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let before = slots.len();
        slots.retain(|path, _| !path.starts_with(dir));
        before - slots.len()
    }

    pub fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
