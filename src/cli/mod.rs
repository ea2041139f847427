//! CLI argument parsing for inidoc.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// inidoc: parse, inspect and normalize INI files.
///
/// Duplicate sections and keys, whitespace, case and empty entries are
/// handled according to the parse options shared by every subcommand.
#[derive(Parser, Debug)]
#[command(name = "inidoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

/// Available commands for inidoc.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse INI files and print their canonical form.
    ///
    /// Files are loaded independently and printed in argument order.
    Show(ShowArgs),

    /// Print a single value.
    Get(GetArgs),

    /// Rewrite an INI file in canonical form.
    ///
    /// Sections and keys are sorted, comments and blank lines dropped.
    Fmt(FmtArgs),
}

/// Parse options shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct ParseArgs {
    /// YAML file with parse policies; the options below override it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Duplicate section policy (error, overwrite, merge, ignore).
    #[arg(long)]
    pub section_policy: Option<String>,

    /// Duplicate key policy (error, overwrite, merge, ignore).
    #[arg(long)]
    pub key_policy: Option<String>,

    /// Whitespace policy for keys and values (trim, preserve).
    #[arg(long)]
    pub whitespace: Option<String>,

    /// Lowercase section names and values.
    #[arg(long)]
    pub case_insensitive: bool,

    /// Accept key-value pairs before the first section header.
    #[arg(long)]
    pub allow_no_section: bool,

    /// Accept empty keys.
    #[arg(long)]
    pub allow_no_key: bool,

    /// Accept empty values.
    #[arg(long)]
    pub allow_no_value: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// INI files to load.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,

    #[command(flatten)]
    pub parse: ParseArgs,
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// INI file to load.
    pub file: PathBuf,

    /// Section name, in stored form.
    pub section: String,

    /// Key name, in stored form.
    pub key: String,

    /// Value printed when the key is missing.
    #[arg(long, default_value = "")]
    pub default: String,

    #[command(flatten)]
    pub parse: ParseArgs,
}

/// Arguments for the `fmt` command.
#[derive(Parser, Debug)]
pub struct FmtArgs {
    /// INI file to normalize.
    pub file: PathBuf,

    /// Write to this path instead of rewriting the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub parse: ParseArgs,
}
