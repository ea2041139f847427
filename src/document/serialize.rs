//! Canonical text and JSON rendering.

use super::Document;
use crate::error::{IniError, Result};
use std::fmt;

impl fmt::Display for Document {
    /// Writes `[section]` followed by one `key = value` line per entry.
    ///
    /// Sections and keys come out in lexicographic order, every line ends
    /// with `\n`, and no blank line separates sections.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, entries) in self.sections() {
            writeln!(f, "[{}]", name)?;
            for (key, value) in entries {
                writeln!(f, "{} = {}", key, value)?;
            }
        }
        Ok(())
    }
}

impl Document {
    /// Render the document as a JSON object of objects.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| IniError::UserError(format!("failed to serialize document to JSON: {}", e)))
    }
}
