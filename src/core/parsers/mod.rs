//! File parsers.
//!
//! - `json`: definition file parser (top-level translation keys)

pub mod json;
