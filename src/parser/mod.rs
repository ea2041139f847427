//! Line-oriented INI parser.
//!
//! The parser is a single-pass state machine. Each line is classified on its
//! trimmed form and then handled immediately:
//!
//! - blank lines and `;`/`#` comments are skipped,
//! - `[name]` headers switch the current section, subject to the
//!   [`SectionDuplicatePolicy`],
//! - everything else must be a `key=value` pair, inserted into the current
//!   section subject to the [`KeyDuplicatePolicy`].
//!
//! There is no lookahead and no backtracking. The first violation stops the
//! parse with an [`IniError::ParseError`] carrying the 1-based line number;
//! whatever was inserted before that line stays in the document.

mod helpers;


use crate::config::{KeyDuplicatePolicy, LoadFlag, ParseConfig, SectionDuplicatePolicy, WhitespacePolicy};
use crate::document::Document;
use crate::error::{IniError, Result};
use helpers::{LineKind, classify, fold_case, strip_line_ending, trim};
use std::collections::btree_map::Entry;
use std::io::BufRead;
use tracing::{debug, trace};

/// Parser state for one load pass.
///
/// Borrows the target document mutably so a failed load leaves it exactly
/// as populated up to the failing line.
#[derive(Debug)]
pub struct Parser<'d> {
    config: ParseConfig,
    document: &'d mut Document,
    /// Section receiving key-value pairs; empty until the first header.
    current_section: String,
    /// Number of lines fed so far, i.e. the 1-based number of the last line.
    line_number: usize,
}

impl<'d> Parser<'d> {
    pub fn new(document: &'d mut Document, config: ParseConfig) -> Self {
        Self {
            config,
            document,
            current_section: String::new(),
            line_number: 0,
        }
    }

    /// Section currently receiving key-value pairs (`""` before any header).
    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// 1-based number of the last line fed, 0 before the first.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Feed every line of `text`.
    pub fn feed_str(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            self.feed_line(line)?;
        }
        Ok(())
    }

    /// Feed every line of a buffered reader.
    ///
    /// Read failures surface as `FileError`, not as parse errors.
    pub fn feed_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line.map_err(|e| {
                IniError::FileError(format!(
                    "failed to read line {}: {}",
                    self.line_number + 1,
                    e
                ))
            })?;
            self.feed_line(&line)?;
        }
        Ok(())
    }

    /// Process a single line of input.
    ///
    /// The line counter advances before anything else, so errors always
    /// cite the line being processed.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let raw = strip_line_ending(raw);
        let trimmed = trim(raw);

        match classify(trimmed) {
            LineKind::Blank => {
                trace!(line = self.line_number, "skipping blank or comment line");
                Ok(())
            }
            LineKind::Section(name) => self.enter_section(name),
            LineKind::Pair => self.insert_pair(raw, trimmed),
        }
    }

    fn enter_section(&mut self, name: &str) -> Result<()> {
        let name = if self.config.has_flag(LoadFlag::CaseSensitive) {
            name.to_string()
        } else {
            fold_case(name)
        };
        trace!(line = self.line_number, section = %name, "section header");

        if !self.document.has_section(&name) {
            self.document.insert_section(&name);
            self.current_section = name;
            return Ok(());
        }

        debug!(
            line = self.line_number,
            section = %name,
            policy = ?self.config.section_policy,
            "duplicate section"
        );

        match self.config.section_policy {
            SectionDuplicatePolicy::Error => {
                return Err(IniError::parse(
                    self.line_number,
                    format!("Duplicate section: {}", name),
                ));
            }
            SectionDuplicatePolicy::Overwrite => {
                self.document.clear_section(&name);
            }
            SectionDuplicatePolicy::Merge => {}
            // Header accepted but the previous section stays current.
            SectionDuplicatePolicy::Ignore => return Ok(()),
        }

        self.current_section = name;
        Ok(())
    }

    fn insert_pair(&mut self, raw: &str, trimmed: &str) -> Result<()> {
        let Some(delimiter) = raw.find('=') else {
            return Err(IniError::parse(
                self.line_number,
                format!("Invalid line (no '=' found): {}", trimmed),
            ));
        };

        let (mut key, mut value) = (&raw[..delimiter], &raw[delimiter + 1..]);
        if self.config.whitespace_policy == WhitespacePolicy::Trim {
            key = trim(key);
            value = trim(value);
        }

        if key.is_empty() && !self.config.has_flag(LoadFlag::AllowNoKey) {
            return Err(IniError::parse(
                self.line_number,
                format!("Empty key in line: {}", trimmed),
            ));
        }

        if value.is_empty() && !self.config.has_flag(LoadFlag::AllowNoValue) {
            return Err(IniError::parse(
                self.line_number,
                format!("Empty value for key: {} in line: {}", key, trimmed),
            ));
        }

        // Keys are never folded, only values.
        let value = if self.config.has_flag(LoadFlag::CaseSensitive) {
            value.to_string()
        } else {
            fold_case(value)
        };

        if self.current_section.is_empty() && !self.config.has_flag(LoadFlag::AllowNoSection) {
            return Err(IniError::parse(
                self.line_number,
                format!("Key-value pair found outside of a section: {}", trimmed),
            ));
        }

        let section = self.document.section_entry(&self.current_section);
        let mut existing = match section.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                trace!(line = self.line_number, key = %key, "inserting key");
                slot.insert(value);
                return Ok(());
            }
            Entry::Occupied(slot) => slot,
        };

        debug!(
            line = self.line_number,
            section = %self.current_section,
            key = %key,
            policy = ?self.config.key_policy,
            "duplicate key"
        );

        match self.config.key_policy {
            KeyDuplicatePolicy::Error => {
                return Err(IniError::parse(
                    self.line_number,
                    format!("Duplicated key: {}", key),
                ));
            }
            KeyDuplicatePolicy::Overwrite => {
                existing.insert(value);
            }
            KeyDuplicatePolicy::Merge => existing.get_mut().push_str(&value),
            KeyDuplicatePolicy::Ignore => {}
        }

        Ok(())
    }
}
