use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

/// Decides which files are searched for key usages.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extensions: Vec<String>,
    excluded: Pattern,
}

impl SourceFilter {
    pub fn new(extensions: Vec<String>, excluded: Pattern) -> Self {
        Self {
            extensions,
            excluded,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.extensions.clone(),
            config.excluded_pattern()?,
        ))
    }

    /// True for files with a tracked extension whose name is not excluded.
    ///
    /// The excluded pattern is matched against the file name only, so
    /// `translationImports.ts` is skipped at any depth.
    pub fn is_eligible(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|tracked| tracked == ext));
        if !has_extension {
            return false;
        }

        match path.file_name() {
            Some(name) => !self.excluded.matches(&name.to_string_lossy()),
            None => false,
        }
    }
}

/// Walk `root` and hand every eligible file to `on_file`.
///
/// Stops early when `on_file` returns `false`. Any entry the walk cannot read
/// is an error: a partial file list would make keys look unused.
///
/// Returns the number of files handed out.
pub fn scan_files<F>(root: &Path, filter: &SourceFilter, mut on_file: F) -> Result<usize>
where
    F: FnMut(PathBuf) -> bool,
{
    let mut count = 0;

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| {
            format!("Failed to walk directory tree under {}", root.display())
        })?;

        if !entry.file_type().is_file() || !filter.is_eligible(entry.path()) {
            continue;
        }

        count += 1;
        if !on_file(entry.into_path()) {
            break;
        }
    }

    Ok(count)
}
