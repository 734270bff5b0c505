//! # Filekit Text Command Group
//!
//! File: cli/src/commands/text/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `filekit text`:
//!
//! - `read`: print a file decoded with a chosen encoding
//! - `write`: write or append text with a chosen encoding
//! - `lines`: count lines
//! - `replace`: find/replace in place
//!
//! When `--encoding` is omitted, the `[text] encoding` configuration value is
//! used; unrecognized names fall back to the default encoding (UTF-8, no BOM).
//!
//! ```bash
//! filekit text write notes.txt "hello" --encoding unicode
//! filekit text write notes.txt " again" --append
//! filekit text read notes.txt
//! filekit text lines src/main.rs --ignore-blank
//! filekit text replace config.ini localhost db.internal
//! ```
//!
use crate::common::fs::encoding::TextEncoding;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Implements `filekit text lines`.
mod lines;
/// Implements `filekit text read`.
mod read;
/// Implements `filekit text replace`.
mod replace;
/// Implements `filekit text write`.
mod write;

/// Arguments for the `filekit text` command group.
#[derive(Parser, Debug)]
pub struct TextArgs {
    #[command(subcommand)]
    command: TextCommand,
}

#[derive(Subcommand, Debug)]
enum TextCommand {
    /// Print the contents of a text file.
    Read(read::ReadArgs),
    /// Write (or append) text to a file.
    Write(write::WriteArgs),
    /// Count the lines in a text file.
    Lines(lines::LinesArgs),
    /// Replace every occurrence of a string in a file.
    Replace(replace::ReplaceArgs),
}

/// Dispatches `filekit text <subcommand>`.
pub fn handle_text(args: TextArgs) -> Result<()> {
    match args.command {
        TextCommand::Read(args) => read::handle_read(args),
        TextCommand::Write(args) => write::handle_write(args),
        TextCommand::Lines(args) => lines::handle_lines(args),
        TextCommand::Replace(args) => replace::handle_replace(args),
    }
}

/// Resolves the encoding to use: the explicit flag, else the configured one.
fn resolve_encoding(flag: Option<&str>) -> Result<TextEncoding> {
    match flag {
        Some(name) => Ok(TextEncoding::from_name(name)),
        None => {
            let cfg = config::load_config().context("Failed to load filekit configuration")?;
            Ok(cfg.text_encoding())
        }
    }
}
