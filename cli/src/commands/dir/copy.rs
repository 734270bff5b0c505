//! # Filekit Dir Copy Command
//!
//! File: cli/src/commands/dir/copy.rs
//!
//! Implements `filekit dir copy <SOURCE> <DESTINATION>`. Existing destination
//! files abort the copy unless `--overwrite` is passed or `[copy] overwrite`
//! is set in the configuration. `--no-overwrite` overrides the configuration.
//!
use crate::commands::flag_or_config;
use crate::common::fs::copy::{copy_directory_tree, CopyOptions};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CopyArgs {
    /// Directory to copy from.
    pub source: PathBuf,
    /// Directory to copy into (created if missing).
    pub destination: PathBuf,
    /// Replace files that already exist at the destination.
    #[arg(long, overrides_with = "no_overwrite")]
    pub overwrite: bool,
    /// Fail on existing destination files, even if the configuration allows
    /// overwriting.
    #[arg(long, overrides_with = "overwrite")]
    pub no_overwrite: bool,
}

pub fn handle_copy(args: CopyArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load filekit configuration")?;
    let options = CopyOptions {
        overwrite: flag_or_config(args.overwrite, args.no_overwrite, cfg.copy.overwrite),
    };
    copy_directory_tree(&args.source, &args.destination, &options)?;
    println!(
        "Copied '{}' to '{}'.",
        args.source.display(),
        args.destination.display()
    );
    Ok(())
}
