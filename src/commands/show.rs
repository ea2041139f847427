//! `inidoc show`: load files and print their canonical rendering.

use super::resolve_config;
use crate::cli::ShowArgs;
use inidoc::error::{IniError, Result};
use inidoc::{Document, ParseConfig};
use std::path::PathBuf;
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(IniError::UserError(format!(
                "invalid format '{}': expected text or json",
                other
            ))),
        }
    }
}

pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let config = resolve_config(&args.parse)?;

    let rendered = render_files(&args.files, config, format)?;
    println!("{}", rendered.join("\n"));
    Ok(())
}

/// Load every file on its own thread, each into its own document.
///
/// Results come back in argument order; the first failure wins.
fn load_all(files: &[PathBuf], config: ParseConfig) -> Vec<Result<Document>> {
    thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|path| scope.spawn(move || Document::from_file(path, config)))
            .collect();

        handles
            .into_iter()
            .zip(files)
            .map(|(handle, path)| {
                handle.join().unwrap_or_else(|_| {
                    Err(IniError::FileError(format!(
                        "loader thread panicked: {}",
                        path.display()
                    )))
                })
            })
            .collect()
    })
}

fn render_files(files: &[PathBuf], config: ParseConfig, format: OutputFormat) -> Result<Vec<String>> {
    load_all(files, config)
        .into_iter()
        .map(|result| {
            let document = result?;
            match format {
                OutputFormat::Text => Ok(document.to_string()),
                OutputFormat::Json => document.to_json(),
            }
        })
        .collect()
}
