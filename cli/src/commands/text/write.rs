//! # Filekit Text Write Command
//!
//! File: cli/src/commands/text/write.rs
//!
//! Implements `filekit text write <FILE> <CONTENTS>`. Replaces the file by
//! default; `--append` adds to the end instead. Parent directories are created.
//!
use super::resolve_encoding;
use crate::common::fs::text::write_text;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to write.
    pub file: PathBuf,
    /// Text to write.
    pub contents: String,
    /// Append instead of overwriting.
    #[arg(short, long)]
    pub append: bool,
    /// Encoding (ASCII, UTF7, UTF8, UTF32, UNICODE).
    #[arg(short, long)]
    pub encoding: Option<String>,
}

pub fn handle_write(args: WriteArgs) -> Result<()> {
    let encoding = resolve_encoding(args.encoding.as_deref())?;
    info!("Writing {:?} as {}", args.file, encoding);
    write_text(&args.file, &args.contents, !args.append, encoding)
}
