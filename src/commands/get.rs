//! `inidoc get`: print one value.

use super::resolve_config;
use crate::cli::GetArgs;
use inidoc::Document;
use inidoc::error::Result;

pub fn cmd_get(args: GetArgs) -> Result<()> {
    let config = resolve_config(&args.parse)?;
    let document = Document::from_file(&args.file, config)?;

    println!("{}", document.get(&args.section, &args.key, &args.default));
    Ok(())
}
