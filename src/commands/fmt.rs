//! `inidoc fmt`: rewrite a file in canonical form.

use super::resolve_config;
use crate::cli::FmtArgs;
use inidoc::error::Result;
use inidoc::{Document, ParseConfig};
use std::path::Path;

pub fn cmd_fmt(args: FmtArgs) -> Result<()> {
    let config = resolve_config(&args.parse)?;
    let output = args.output.as_deref().unwrap_or(args.file.as_path());

    let document = format_file(&args.file, output, config)?;

    eprintln!(
        "Formatted {} ({} sections) -> {}",
        args.file.display(),
        document.section_count(),
        output.display()
    );
    Ok(())
}

fn format_file(input: &Path, output: &Path, config: ParseConfig) -> Result<Document> {
    let document = Document::from_file(input, config)?;
    document.save(output)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_file_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.ini");
        std::fs::write(&path, "; settings\n[b]\n  y=2\n[a]\nx =1\n").unwrap();

        format_file(&path, &path, ParseConfig::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[a]\nx = 1\n[b]\ny = 2\n");
    }

    #[test]
    fn test_format_file_parse_error_leaves_input_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.ini");
        let original = "[a]\nx=1\nx=2\n";
        std::fs::write(&path, original).unwrap();

        let result = format_file(&path, &path, ParseConfig::default());

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
