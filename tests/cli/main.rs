use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde::Deserialize;
use tempfile::TempDir;

mod config;
mod errors;

const BIN_NAME: &str = "dead-keys";

/// Default definition file location for a package directory.
pub const DEFINITION: &str = "translator/master/translation.en.json";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedKey {
    pub name: String,
    pub file_path: String,
}

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a definition file for the package at `package_dir`.
    pub fn write_definitions(&self, package_dir: &str, json: &str) -> Result<()> {
        let path = if package_dir.is_empty() {
            DEFINITION.to_string()
        } else {
            format!("{}/{}", package_dir, DEFINITION)
        };
        self.write_file(&path, json)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// `dead-keys .` run from the project root.
    pub fn scan_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg(".");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_report(&self, path: &str) -> Result<Vec<ReportedKey>> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid report JSON in {}", path))
    }

    pub fn unused_names(&self) -> Result<HashSet<String>> {
        Ok(self
            .read_report("unused_keys.json")?
            .into_iter()
            .map(|key| key.name)
            .collect())
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn names(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}
