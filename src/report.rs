//! Report files.
//!
//! Writes `all_keys.json` and `unused_keys.json`. Both are JSON arrays of
//! `{"name": ..., "filePath": ...}` objects, indented with tabs.
//!
//! Each file is written to a temporary file next to its destination and then
//! renamed over it, so a failed write never leaves a truncated report behind.
//! A failure on one file does not prevent the other from being written.

use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::{
    config::{ALL_KEYS_FILE_NAME, UNUSED_KEYS_FILE_NAME},
    core::{Key, UsageTable},
};

/// Collected keys split into everything and the unused subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub all_keys: Vec<Key>,
    pub unused_keys: Vec<Key>,
}

impl KeyReport {
    pub fn new(all_keys: Vec<Key>, usage: &UsageTable) -> Self {
        let unused_keys = unused_keys(&all_keys, usage);
        Self {
            all_keys,
            unused_keys,
        }
    }

    pub fn total_count(&self) -> usize {
        self.all_keys.len()
    }

    pub fn unused_count(&self) -> usize {
        self.unused_keys.len()
    }
}

/// Every key whose name was never flagged, in the order of `keys`.
///
/// Records sharing a name are either all kept or all dropped.
pub fn unused_keys(keys: &[Key], usage: &UsageTable) -> Vec<Key> {
    let unused: HashSet<Arc<str>> = usage.unused_names().into_iter().collect();
    keys.iter()
        .filter(|key| unused.contains(key.name.as_str()))
        .cloned()
        .collect()
}

/// Outcome of writing both report files.
#[derive(Debug, Default)]
pub struct WriteOutcome {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl WriteOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write both report files into `output_dir`, logging any failure.
pub fn write_reports(output_dir: &Path, report: &KeyReport) -> WriteOutcome {
    let mut outcome = WriteOutcome::default();

    let targets = [
        (ALL_KEYS_FILE_NAME, &report.all_keys),
        (UNUSED_KEYS_FILE_NAME, &report.unused_keys),
    ];
    for (file_name, keys) in targets {
        let path = output_dir.join(file_name);
        match write_key_list(&path, keys) {
            Ok(()) => {
                tracing::debug!(file = %path.display(), keys = keys.len(), "wrote report");
                outcome.written.push(path);
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                outcome.failed.push(path);
            }
        }
    }

    outcome
}

/// Serialize `keys` and atomically replace `path` with the result.
pub fn write_key_list(path: &Path, keys: &[Key]) -> Result<()> {
    let content = to_json(keys).context("Failed to serialize key list")?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(&content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

/// Tab-indented JSON array with a trailing newline.
fn to_json(keys: &[Key]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    keys.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
