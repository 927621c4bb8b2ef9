//! dead-keys - find translation keys that no source file references
//!
//! Scans a project tree for JSON definition files (by default
//! `translator/master/translation.en.json` under any directory), then searches
//! every `.ts`/`.tsx` file for each key name and reports the keys that never
//! appear.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, summary output)
//! - `config`: Project layout defaults and `.deadkeysrc.json` loading
//! - `core`: Key collection and the parallel usage scan
//! - `logging`: tracing subscriber setup
//! - `report`: `all_keys.json` / `unused_keys.json` writer

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod report;
