//! ParseConfig struct definition and builder helpers.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Policies applied while loading INI text.
///
/// Can be built in code or read from a YAML file (see `ParseConfig::load`).
/// Missing fields fall back to their defaults: `error` for both duplicate
/// policies, `trim` for whitespace, and `{case_sensitive}` for the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParseConfig {
    /// Policy for a repeated section header.
    pub section_policy: SectionDuplicatePolicy,

    /// Policy for a repeated key within the current section.
    pub key_policy: KeyDuplicatePolicy,

    /// Looseness toggles.
    pub load_flags: LoadFlags,

    /// Whitespace handling around keys and values.
    pub whitespace_policy: WhitespacePolicy,
}

impl ParseConfig {
    pub fn with_section_policy(mut self, policy: SectionDuplicatePolicy) -> Self {
        self.section_policy = policy;
        self
    }

    pub fn with_key_policy(mut self, policy: KeyDuplicatePolicy) -> Self {
        self.key_policy = policy;
        self
    }

    pub fn with_whitespace_policy(mut self, policy: WhitespacePolicy) -> Self {
        self.whitespace_policy = policy;
        self
    }

    pub fn with_load_flags(mut self, flags: LoadFlags) -> Self {
        self.load_flags = flags;
        self
    }

    pub fn with_flag(mut self, flag: LoadFlag) -> Self {
        self.load_flags.insert(flag);
        self
    }

    pub fn without_flag(mut self, flag: LoadFlag) -> Self {
        self.load_flags.remove(flag);
        self
    }

    /// Shorthand for `load_flags.contains(flag)`.
    pub fn has_flag(&self, flag: LoadFlag) -> bool {
        self.load_flags.contains(flag)
    }
}
