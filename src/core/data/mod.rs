//! Core data types shared by the collection, scan and report phases.
//!
//! ## Module Structure
//!
//! - `key`: Key (name + definition file path)
//! - `usage_table`: UsageTable (shared per-name usage flags)

pub mod key;
pub mod usage_table;

pub use key::Key;
pub use usage_table::UsageTable;
