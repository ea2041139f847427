//! inidoc: policy-driven INI parser and serializer.
//!
//! Text is parsed line by line into a [`Document`] (section -> key -> value),
//! with configurable handling of duplicate sections and keys, whitespace,
//! case, and section-less or empty entries. Documents render back to
//! canonical text through `Display`.
//!
//! ```
//! use inidoc::{Document, KeyDuplicatePolicy, ParseConfig};
//!
//! let config = ParseConfig::default().with_key_policy(KeyDuplicatePolicy::Merge);
//! let doc = Document::parse("[a]\nk=1\nk=2\n", config)?;
//! assert_eq!(doc.get("a", "k", ""), "12");
//! assert_eq!(doc.to_string(), "[a]\nk = 12\n");
//! # Ok::<(), inidoc::IniError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod parser;

pub use config::{
    KeyDuplicatePolicy, LoadFlag, LoadFlags, ParseConfig, SectionDuplicatePolicy, WhitespacePolicy,
};
pub use document::{Document, Section};
pub use error::{IniError, Result};
pub use parser::Parser;
