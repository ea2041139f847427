//! Policy enums and load flags for the parser.
//!
//! Every knob is resolved by exact match on its variant; there is no
//! precedence between them.

use serde::{Deserialize, Serialize};

/// What to do when a section header repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SectionDuplicatePolicy {
    /// Fail the load (default).
    #[default]
    Error,
    /// Clear the existing section's keys and refill it.
    Overwrite,
    /// Keep filling the existing section.
    Merge,
    /// Accept the header without switching the current section.
    Ignore,
}

impl SectionDuplicatePolicy {
    /// Parse a section policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "error" => Some(Self::Error),
            "overwrite" => Some(Self::Overwrite),
            "merge" => Some(Self::Merge),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// What to do when a key repeats inside the current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyDuplicatePolicy {
    /// Fail the load (default).
    #[default]
    Error,
    /// Replace the stored value.
    Overwrite,
    /// Append the new value to the stored one, no separator.
    Merge,
    /// Keep the stored value and drop the line.
    Ignore,
}

impl KeyDuplicatePolicy {
    /// Parse a key policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "error" => Some(Self::Error),
            "overwrite" => Some(Self::Overwrite),
            "merge" => Some(Self::Merge),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// Whitespace handling around keys and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WhitespacePolicy {
    #[default]
    Trim,
    Preserve,
}

impl WhitespacePolicy {
    /// Parse a whitespace policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "trim" => Some(Self::Trim),
            "preserve" => Some(Self::Preserve),
            _ => None,
        }
    }
}

/// A single relaxation (or tightening) of the parser's strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFlag {
    /// Store section names and values as written instead of lowercased.
    CaseSensitive,
    /// Permit key-value pairs before any section header.
    AllowNoSection,
    /// Permit an empty key.
    AllowNoKey,
    /// Permit an empty value.
    AllowNoValue,
}

/// Combinable set of [`LoadFlag`]s.
///
/// Defaults to `{CaseSensitive}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadFlags {
    pub case_sensitive: bool,
    pub allow_no_section: bool,
    pub allow_no_key: bool,
    pub allow_no_value: bool,
}

impl Default for LoadFlags {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            allow_no_section: false,
            allow_no_key: false,
            allow_no_value: false,
        }
    }
}

impl LoadFlags {
    /// The empty set: case-insensitive and strict about everything else.
    pub fn none() -> Self {
        Self {
            case_sensitive: false,
            ..Self::default()
        }
    }

    pub fn contains(&self, flag: LoadFlag) -> bool {
        match flag {
            LoadFlag::CaseSensitive => self.case_sensitive,
            LoadFlag::AllowNoSection => self.allow_no_section,
            LoadFlag::AllowNoKey => self.allow_no_key,
            LoadFlag::AllowNoValue => self.allow_no_value,
        }
    }

    pub fn insert(&mut self, flag: LoadFlag) {
        self.set(flag, true);
    }

    pub fn remove(&mut self, flag: LoadFlag) {
        self.set(flag, false);
    }

    fn set(&mut self, flag: LoadFlag, enabled: bool) {
        match flag {
            LoadFlag::CaseSensitive => self.case_sensitive = enabled,
            LoadFlag::AllowNoSection => self.allow_no_section = enabled,
            LoadFlag::AllowNoKey => self.allow_no_key = enabled,
            LoadFlag::AllowNoValue => self.allow_no_value = enabled,
        }
    }
}

impl FromIterator<LoadFlag> for LoadFlags {
    /// Builds a set containing exactly the given flags.
    fn from_iter<I: IntoIterator<Item = LoadFlag>>(iter: I) -> Self {
        let mut flags = Self::none();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}
