//! Command implementations for inidoc.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the translation of shared parse options into a
//! `ParseConfig`.

mod fmt;
mod get;
mod show;

use crate::cli::{Command, ParseArgs};
use inidoc::error::{IniError, Result};
use inidoc::{KeyDuplicatePolicy, LoadFlag, ParseConfig, SectionDuplicatePolicy, WhitespacePolicy};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Show(args) => show::cmd_show(args),
        Command::Get(args) => get::cmd_get(args),
        Command::Fmt(args) => fmt::cmd_fmt(args),
    }
}

/// Build the effective parse configuration.
///
/// Starts from the `--config` file (or defaults) and applies every
/// command-line option on top.
pub(crate) fn resolve_config(args: &ParseArgs) -> Result<ParseConfig> {
    let mut config = match &args.config {
        Some(path) => ParseConfig::load(path)?,
        None => ParseConfig::default(),
    };

    if let Some(name) = &args.section_policy {
        let policy = SectionDuplicatePolicy::from_str(name).ok_or_else(|| {
            IniError::UserError(format!(
                "invalid section policy '{}': expected error, overwrite, merge or ignore",
                name
            ))
        })?;
        config = config.with_section_policy(policy);
    }

    if let Some(name) = &args.key_policy {
        let policy = KeyDuplicatePolicy::from_str(name).ok_or_else(|| {
            IniError::UserError(format!(
                "invalid key policy '{}': expected error, overwrite, merge or ignore",
                name
            ))
        })?;
        config = config.with_key_policy(policy);
    }

    if let Some(name) = &args.whitespace {
        let policy = WhitespacePolicy::from_str(name).ok_or_else(|| {
            IniError::UserError(format!(
                "invalid whitespace policy '{}': expected trim or preserve",
                name
            ))
        })?;
        config = config.with_whitespace_policy(policy);
    }

    if args.case_insensitive {
        config = config.without_flag(LoadFlag::CaseSensitive);
    }
    if args.allow_no_section {
        config = config.with_flag(LoadFlag::AllowNoSection);
    }
    if args.allow_no_key {
        config = config.with_flag(LoadFlag::AllowNoKey);
    }
    if args.allow_no_value {
        config = config.with_flag(LoadFlag::AllowNoValue);
    }

    Ok(config)
}
