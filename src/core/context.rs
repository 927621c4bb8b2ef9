use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::{
    cli::args::ScanArgs,
    config::{Config, load_config},
    core::{
        Key, UsageTable,
        collect::{DefinitionWarning, collect_keys},
        file_scanner::SourceFilter,
        key_usage::{ScanStats, find_used_keys},
    },
};

/// Everything the report needs once both phases finished.
#[derive(Debug)]
pub struct Analysis {
    /// All collected keys, in traversal order.
    pub keys: Vec<Key>,
    /// Final usage flags, one per distinct key name.
    pub usage: UsageTable,
    pub definition_files: usize,
    pub definition_warnings: Vec<DefinitionWarning>,
    pub scan: ScanStats,
}

/// Configuration and root directory for one run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--jobs 4`)
/// 2. `.deadkeysrc.json`, searched from the root upwards
/// 3. Built-in defaults
pub struct AnalysisContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
}

impl AnalysisContext {
    pub fn new(args: &ScanArgs) -> Result<Self> {
        check_root(&args.root)?;

        // Search from the absolute root so `.` can still reach parent directories.
        let search_start = args.root.canonicalize().unwrap_or_else(|_| args.root.clone());
        let loaded = load_config(&search_start)?;
        let mut config = loaded.config;
        if let Some(jobs) = args.jobs {
            config.jobs = Some(jobs);
        }
        config.validate()?;

        if let Some(path) = &loaded.path {
            tracing::debug!(config = %path.display(), "loaded config file");
        }

        Ok(Self {
            config,
            root_dir: args.root.clone(),
            config_path: loaded.path,
        })
    }

    /// Build a context without looking for a config file.
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Result<Self> {
        let root_dir = root.into();
        check_root(&root_dir)?;
        config.validate()?;
        Ok(Self {
            config,
            root_dir,
            config_path: None,
        })
    }

    /// Collect every key, then scan the sources for usages.
    pub fn analyze(&self) -> Result<Analysis> {
        let filter = SourceFilter::from_config(&self.config)?;

        let collected = collect_keys(&self.root_dir, &self.config)?;
        tracing::info!(
            keys = collected.keys.len(),
            definition_files = collected.definition_files,
            plural_skipped = collected.plural_skipped,
            "collected translation keys"
        );

        let usage = UsageTable::from_keys(&collected.keys);
        let scan = find_used_keys(
            &self.root_dir,
            &filter,
            &usage,
            self.config.worker_count(),
        )?;
        tracing::info!(
            files = scan.files_scanned,
            skipped = scan.files_skipped,
            "scanned source files"
        );

        Ok(Analysis {
            keys: collected.keys,
            usage,
            definition_files: collected.definition_files,
            definition_warnings: collected.warnings,
            scan,
        })
    }
}

fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        bail!("Root path '{}' does not exist.", root.display());
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }
    Ok(())
}
