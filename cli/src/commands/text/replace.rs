//! # Filekit Text Replace Command
//!
//! File: cli/src/commands/text/replace.rs
//!
use crate::common::fs::text::replace_in_file;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ReplaceArgs {
    /// File to edit in place.
    pub file: PathBuf,
    /// Text to find.
    pub find: String,
    /// Replacement text.
    pub replace: String,
}

pub fn handle_replace(args: ReplaceArgs) -> Result<()> {
    replace_in_file(&args.file, &args.find, &args.replace)
}
