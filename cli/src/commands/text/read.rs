//! # Filekit Text Read Command
//!
//! File: cli/src/commands/text/read.rs
//!
use super::resolve_encoding;
use crate::common::fs::text::read_text;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// File to read.
    pub file: PathBuf,
    /// Encoding (ASCII, UTF7, UTF8, UTF32, UNICODE). A byte-order mark in the file wins.
    #[arg(short, long)]
    pub encoding: Option<String>,
}

pub fn handle_read(args: ReadArgs) -> Result<()> {
    let encoding = resolve_encoding(args.encoding.as_deref())?;
    let contents = read_text(&args.file, encoding)?;
    print!("{}", contents);
    Ok(())
}
