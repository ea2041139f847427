//! Error types for inidoc.
//!
//! Uses thiserror for derive macros. Parse errors always carry the 1-based
//! line number at which the violated rule was detected.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for inidoc operations.
#[derive(Error, Debug)]
pub enum IniError {
    /// The path is empty, or the file could not be opened, read, or written.
    #[error("File Error: {0}")]
    FileError(String),

    /// A line was malformed or rejected by the active policies.
    #[error("Parse Error: {message} on line: {line}")]
    ParseError { line: usize, message: String },

    /// Invalid command-line arguments or parse configuration.
    #[error("{0}")]
    UserError(String),
}

impl IniError {
    /// Build a parse error for the given line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        IniError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Line number for parse errors, `None` for every other kind.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            IniError::ParseError { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            IniError::FileError(_) => exit_codes::FILE_FAILURE,
            IniError::ParseError { .. } => exit_codes::PARSE_FAILURE,
            IniError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for inidoc operations.
pub type Result<T> = std::result::Result<T, IniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_error_has_correct_exit_code() {
        let err = IniError::FileError("Filename is empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::FILE_FAILURE);
        assert_eq!(err.line_number(), None);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = IniError::parse(3, "Duplicated key: k");
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
        assert_eq!(err.line_number(), Some(3));
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = IniError::UserError("unknown policy".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = IniError::FileError("Could not open file: a.ini".to_string());
        assert_eq!(err.to_string(), "File Error: Could not open file: a.ini");

        let err = IniError::parse(7, "Duplicate section: db");
        assert_eq!(err.to_string(), "Parse Error: Duplicate section: db on line: 7");
    }
}
