//! File I/O for documents.

use super::Document;
use crate::config::ParseConfig;
use crate::error::{IniError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Reject empty paths before any filesystem call is made.
fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(IniError::FileError("Filename is empty".to_string()));
    }
    Ok(())
}

impl Document {
    /// Create a document from an INI file.
    pub fn from_file<P: AsRef<Path>>(path: P, config: ParseConfig) -> Result<Self> {
        let mut document = Self::new();
        document.load(path, config)?;
        Ok(document)
    }

    /// Populate this document from an INI file.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Every line was accepted
    /// * `Err(IniError::FileError)` - Empty path, or the file could not be opened or read
    /// * `Err(IniError::ParseError)` - A line was rejected; earlier lines stay applied
    pub fn load<P: AsRef<Path>>(&mut self, path: P, config: ParseConfig) -> Result<()> {
        let path = path.as_ref();
        require_path(path)?;

        let file = File::open(path).map_err(|e| {
            IniError::FileError(format!("Could not open file: {}: {}", path.display(), e))
        })?;

        self.load_reader(BufReader::new(file), config)?;

        info!(
            path = %path.display(),
            sections = self.section_count(),
            "loaded INI file"
        );
        Ok(())
    }

    /// Atomically write the canonical rendering to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        require_path(path)?;

        crate::fs::atomic_write_file(path, &self.to_string())?;

        info!(
            path = %path.display(),
            sections = self.section_count(),
            "saved INI file"
        );
        Ok(())
    }
}
