//! # Filekit Path Command Group
//!
//! File: cli/src/commands/path/mod.rs
//!
//! ## Overview
//!
//! `filekit path` exposes the separator-driven path parsing helpers. The
//! separator comes from `--separator`, else `[paths] separator` in the
//! configuration, else `\`.
//!
//! ```bash
//! filekit path split 'C:\data\report.txt'
//! # directory: C:\data
//! # file:      report.txt
//!
//! filekit path trailing /var/www --separator /
//! # /var/www/
//! ```
//!
use crate::common::fs::paths::PathStyle;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Arguments for the `filekit path` command group.
#[derive(Parser, Debug)]
pub struct PathArgs {
    #[command(subcommand)]
    command: PathCommand,
    /// Separator character (defaults to the configured one).
    #[arg(short, long, global = true)]
    separator: Option<char>,
}

#[derive(Subcommand, Debug)]
enum PathCommand {
    /// Split a path into its directory and file name.
    Split { path: String },
    /// Print the path with a trailing separator.
    Trailing { path: String },
}

/// Dispatches `filekit path <subcommand>`.
pub fn handle_path(args: PathArgs) -> Result<()> {
    let style = match args.separator {
        Some(sep) => PathStyle::new(sep),
        None => config::load_config()
            .context("Failed to load filekit configuration")?
            .path_style(),
    };
    match args.command {
        PathCommand::Split { path } => {
            let (directory, file_name) = style.split_path(&path);
            println!("directory: {}", directory);
            println!("file:      {}", file_name);
        }
        PathCommand::Trailing { path } => {
            println!("{}", style.ensure_trailing_separator(&path));
        }
    }
    Ok(())
}
