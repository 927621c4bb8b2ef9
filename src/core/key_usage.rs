//! Phase 2: Usage scan - which collected keys appear in source files.
//!
//! A single directory walk feeds eligible file paths into a bounded queue.
//! A fixed pool of workers drains it; each worker handles one file at a time:
//!
//! 1. snapshot the names still unused (lock held only for the copy)
//! 2. read the whole file and search it for every snapshotted name
//! 3. flag the names it found (lock held only for the writes)
//!
//! Matching is a case-sensitive substring search over the entire file
//! content, so an occurrence is found regardless of line layout.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::{Context, Result};
use crossbeam::channel::bounded;
use memchr::memmem;

use crate::core::{
    UsageTable,
    file_scanner::{SourceFilter, scan_files},
};

/// Queue slots per worker. Keeps the walk a little ahead of the workers.
const QUEUE_DEPTH_PER_WORKER: usize = 2;

/// Counters for one usage scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Eligible files handed to workers.
    pub files_queued: usize,
    /// Files a worker finished with, read or not needed.
    pub files_scanned: usize,
    /// Files that could not be read and gave no usage signal.
    pub files_skipped: usize,
}

/// Search every eligible file under `root` and flag the names found in `table`.
///
/// Runs `workers` threads (at least one). Unreadable files are logged and
/// skipped. A failure to walk the tree is returned as an error once every
/// worker has stopped.
pub fn find_used_keys(
    root: &Path,
    filter: &SourceFilter,
    table: &UsageTable,
    workers: usize,
) -> Result<ScanStats> {
    let workers = workers.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("usage-scan-{}", i))
        .build()
        .context("Failed to start usage scan workers")?;

    let (sender, receiver) = bounded::<PathBuf>(workers * QUEUE_DEPTH_PER_WORKER);
    let scanned = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);

    tracing::debug!(workers, root = %root.display(), "starting usage scan");

    // The walk runs on the calling thread. `sender` moves into the callback,
    // so the queue closes as soon as `scan_files` returns.
    let walked = pool.in_place_scope(|scope| {
        for _ in 0..workers {
            let receiver = receiver.clone();
            let (scanned, skipped) = (&scanned, &skipped);
            scope.spawn(move |_| {
                for path in receiver {
                    match scan_file(&path, table) {
                        Ok(_) => {
                            scanned.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => {
                            tracing::warn!("{:#}", e);
                            skipped.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            });
        }
        drop(receiver);

        scan_files(root, filter, move |path| sender.send(path).is_ok())
    });

    let files_queued = walked?;
    Ok(ScanStats {
        files_queued,
        files_scanned: scanned.into_inner(),
        files_skipped: skipped.into_inner(),
    })
}

/// Search one file for the names `table` still has unused and flag the hits.
///
/// Returns the number of names newly found in this file.
fn scan_file(path: &Path, table: &UsageTable) -> Result<usize> {
    if !table.has_unused() {
        return Ok(0);
    }

    // Raw bytes: files need not be valid UTF-8 and nothing may be substituted.
    let content = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    // Snapshot after the read so names found meanwhile by other workers are skipped.
    let found = matching_names(&content, table.unused_names());
    table.mark_used(&found);

    Ok(found.len())
}

/// Names from `candidates` whose UTF-8 bytes occur anywhere in `content`.
pub fn matching_names(content: &[u8], candidates: Vec<Arc<str>>) -> Vec<Arc<str>> {
    candidates
        .into_iter()
        .filter(|name| memmem::find(content, name.as_bytes()).is_some())
        .collect()
}
