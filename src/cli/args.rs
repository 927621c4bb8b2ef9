//! CLI argument definitions using clap.
//!
//! `dead-keys <ROOT>` collects every translation key defined under ROOT,
//! searches the TypeScript sources under ROOT for each of them and writes
//! `all_keys.json` and `unused_keys.json`.

use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Project root to scan for definition files and sources
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Number of worker threads for the usage scan (default: one per CPU)
    #[arg(short, long, env = "DEAD_KEYS_JOBS")]
    pub jobs: Option<usize>,

    /// Directory where the report files are written
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Exit with status 1 when unused keys are found
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
