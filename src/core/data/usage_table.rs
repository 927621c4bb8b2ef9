use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::Key;

/// Shared "seen at least once" flags, one per distinct key name.
///
/// Every access goes through one mutex. Workers take a snapshot of the names
/// still unseen with [`UsageTable::unused_names`], search a file without the
/// lock held, then call [`UsageTable::mark_used`]. Flags only ever go from
/// `false` to `true`, so two workers marking the same name is harmless.
#[derive(Debug, Default)]
pub struct UsageTable {
    flags: Mutex<HashMap<Arc<str>, bool>>,
}

impl UsageTable {
    /// Build a table with every name unseen. Duplicate names share one flag.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let flags = names
            .into_iter()
            .map(|name| (Arc::<str>::from(name), false))
            .collect();
        Self {
            flags: Mutex::new(flags),
        }
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        Self::new(keys.iter().map(|key| key.name.as_str()))
    }

    // Flags stay meaningful after a worker panic since writes are single bools.
    fn lock(&self) -> MutexGuard<'_, HashMap<Arc<str>, bool>> {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the names not yet seen in any file.
    pub fn unused_names(&self) -> Vec<Arc<str>> {
        self.lock()
            .iter()
            .filter(|(_, used)| !**used)
            .map(|(name, _)| Arc::clone(name))
            .collect()
    }

    /// True while at least one name has not been seen.
    pub fn has_unused(&self) -> bool {
        self.lock().values().any(|used| !*used)
    }

    /// Number of distinct names not yet seen.
    pub fn unused_count(&self) -> usize {
        self.lock().values().filter(|used| !**used).count()
    }

    /// Flag every given name as seen. Unknown names are ignored.
    pub fn mark_used<S: AsRef<str>>(&self, names: &[S]) {
        if names.is_empty() {
            return;
        }
        let mut flags = self.lock();
        for name in names {
            if let Some(used) = flags.get_mut(name.as_ref()) {
                *used = true;
            }
        }
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.lock().get(name).copied().unwrap_or(false)
    }

    /// Number of distinct names tracked.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
