//! Core analysis engine.
//!
//! ## Pipeline
//!
//! 1. **Collection** (`collect`): definition files → `Vec<Key>`
//! 2. **Usage scan** (`key_usage`): source files → flags in a `UsageTable`
//! 3. **Report** (`crate::report`): keys + table → output files
//!
//! `context::AnalysisContext` runs phases 1 and 2 for a project root.

pub mod collect;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod key_usage;
pub mod parsers;

pub use data::{Key, UsageTable};
