//! In-memory INI document.
//!
//! A document maps section names to ordered key/value maps. Both levels use
//! `BTreeMap`, so iteration and serialization are lexicographic by name;
//! this is a guarantee, not an accident of the container.
//!
//! The empty section name `""` is the pseudo-section holding pairs that
//! appeared before any header (only produced when `AllowNoSection` is set).

mod io;
mod serialize;


use crate::config::ParseConfig;
use crate::error::Result;
use crate::parser::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Keys and values of a single section, ordered by key.
pub type Section = BTreeMap<String, String>;

/// A parsed (or programmatically built) INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: BTreeMap<String, Section>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` into a new document.
    pub fn parse(text: &str, config: ParseConfig) -> Result<Self> {
        let mut document = Self::new();
        document.load_str(text, config)?;
        Ok(document)
    }

    /// Populate this document from `text`.
    ///
    /// On error the document keeps every change made before the failing line.
    pub fn load_str(&mut self, text: &str, config: ParseConfig) -> Result<()> {
        Parser::new(self, config).feed_str(text)
    }

    /// Populate this document from a buffered reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, config: ParseConfig) -> Result<()> {
        Parser::new(self, config).feed_reader(reader)
    }

    /// Look up a value, falling back to `default`.
    ///
    /// See [`Document::lookup`] for the matching rules.
    pub fn get<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.lookup(section, key).unwrap_or(default)
    }

    /// Look up a value by exact section and key.
    ///
    /// No case folding or trimming happens here; callers pass names in the
    /// stored form. An empty key never matches. An empty section name
    /// addresses the no-section pseudo-section.
    pub fn lookup(&self, section: &str, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Entries of one section.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Sections in lexicographic order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Create an empty section if it does not exist yet.
    pub fn insert_section(&mut self, name: &str) {
        self.section_entry(name);
    }

    /// Set a value, creating the section if needed. Returns the previous value.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Remove a whole section, returning its entries.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    /// Remove every key of a section while keeping the section itself.
    pub(crate) fn clear_section(&mut self, name: &str) {
        if let Some(entries) = self.sections.get_mut(name) {
            entries.clear();
        }
    }

    /// Mutable entries of a section, created empty on first use.
    pub(crate) fn section_entry(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }
}
