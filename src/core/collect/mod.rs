//! Phase 1: Collection - translation keys from definition files.
//!
//! Walks the whole project tree. Every directory named like the configured
//! marker (e.g. `translator`) may own a definition file at a fixed relative
//! path (e.g. `translator/master/translation.en.json`); each top-level field
//! of that file becomes one [`Key`].
//!
//! A definition file that cannot be read or parsed only produces a warning.
//! A directory that cannot be listed aborts the whole collection.

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::{
    config::Config,
    core::{Key, parsers::json::parse_definition_file},
};

/// A definition file that was found but contributed no keys.
#[derive(Debug, Clone)]
pub struct DefinitionWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct CollectResult {
    /// Every key in traversal order, duplicates across files included.
    pub keys: Vec<Key>,
    /// Definition files successfully parsed.
    pub definition_files: usize,
    /// Plural variants left out across all files.
    pub plural_skipped: usize,
    pub warnings: Vec<DefinitionWarning>,
}

pub fn collect_keys(root: &Path, config: &Config) -> Result<CollectResult> {
    let mut result = CollectResult::default();

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| {
            format!("Failed to walk directory tree under {}", root.display())
        })?;

        if !entry.file_type().is_dir() || entry.file_name() != config.marker_dir.as_str() {
            continue;
        }

        let definition = entry.path().join(&config.definition_path);
        if !definition.is_file() {
            tracing::debug!(
                dir = %entry.path().display(),
                "marker directory without definition file"
            );
            continue;
        }

        match parse_definition_file(&definition, &config.plural_marker) {
            Ok(parsed) => {
                tracing::debug!(
                    file = %definition.display(),
                    keys = parsed.keys.len(),
                    "collected definition file"
                );
                result.definition_files += 1;
                result.plural_skipped += parsed.plural_skipped;
                result.keys.extend(parsed.keys);
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                result.warnings.push(DefinitionWarning {
                    file_path: definition.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
