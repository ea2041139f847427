//! Parse configuration for inidoc.
//!
//! This module defines `ParseConfig`, the four independent knobs that drive
//! the loader: section duplicate policy, key duplicate policy, load flags,
//! and whitespace policy. Configs can be built in code or read from YAML.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::ParseConfig;
pub use types::{KeyDuplicatePolicy, LoadFlag, LoadFlags, SectionDuplicatePolicy, WhitespacePolicy};
