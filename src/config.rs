use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".deadkeysrc.json";

/// Report file holding every collected key.
pub const ALL_KEYS_FILE_NAME: &str = "all_keys.json";

/// Report file holding the keys that were never found in a source file.
pub const UNUSED_KEYS_FILE_NAME: &str = "unused_keys.json";

/// Project layout and matching rules.
///
/// Every field can be set from `.deadkeysrc.json`; anything left out falls back
/// to the layout of a `translator/master/translation.en.json` project.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Name of the directories that own a definition file.
    #[serde(default = "default_marker_dir")]
    pub marker_dir: String,
    /// Definition file location, relative to a marker directory.
    #[serde(default = "default_definition_path")]
    pub definition_path: String,
    /// Keys containing this substring are plural variants and are not tracked.
    #[serde(default = "default_plural_marker")]
    pub plural_marker: String,
    /// Extensions (without the dot) of files searched for key usages.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob matched against file names; matching files never count as usages.
    #[serde(default = "default_excluded_file")]
    pub excluded_file: String,
    /// Worker count for the usage scan. `None` means one per logical CPU.
    #[serde(default)]
    pub jobs: Option<usize>,
}

fn default_marker_dir() -> String {
    "translator".to_string()
}

fn default_definition_path() -> String {
    "master/translation.en.json".to_string()
}

fn default_plural_marker() -> String {
    "_plural".to_string()
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx"].map(String::from).to_vec()
}

fn default_excluded_file() -> String {
    "translationImports.ts".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_dir: default_marker_dir(),
            definition_path: default_definition_path(),
            plural_marker: default_plural_marker(),
            extensions: default_extensions(),
            excluded_file: default_excluded_file(),
            jobs: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an invalid `excludedFile` glob, an empty extension
    /// list, an empty marker name or plural marker, or a zero worker count.
    pub fn validate(&self) -> Result<()> {
        self.excluded_pattern()?;

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }
        if self.marker_dir.is_empty() {
            bail!("'markerDir' must not be empty");
        }
        if self.definition_path.is_empty() {
            bail!("'definitionPath' must not be empty");
        }
        // An empty marker would match every key and drop them all.
        if self.plural_marker.is_empty() {
            bail!("'pluralMarker' must not be empty");
        }
        if self.jobs == Some(0) {
            bail!("'jobs' must be at least 1");
        }

        Ok(())
    }

    /// Compile the excluded file name glob.
    pub fn excluded_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.excluded_file).with_context(|| {
            format!(
                "Invalid glob pattern in 'excludedFile': \"{}\"",
                self.excluded_file
            )
        })
    }

    /// Number of usage scan workers, defaulting to the logical CPU count.
    pub fn worker_count(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get).max(1)
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
