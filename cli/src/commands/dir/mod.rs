//! # Filekit Dir Command Group
//!
//! File: cli/src/commands/dir/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `filekit dir`, the directory operations:
//!
//! - `list`: files in a directory, optionally filtered and recursive
//! - `subdirs`: immediate sub-directories
//! - `copy`: recursive tree copy
//!
//! ## Examples
//!
//! ```bash
//! filekit dir list ./logs --pattern '*.log' --recursive
//! filekit dir subdirs ./projects
//! filekit dir copy ./site ./backup/site --overwrite
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `filekit dir copy`.
mod copy;
/// Implements `filekit dir list`.
mod list;
/// Implements `filekit dir subdirs`.
mod subdirs;

/// Arguments for the `filekit dir` command group.
#[derive(Parser, Debug)]
pub struct DirArgs {
    #[command(subcommand)]
    command: DirCommand,
}

#[derive(Subcommand, Debug)]
enum DirCommand {
    /// List files with size and modification time.
    List(list::ListArgs),
    /// List immediate sub-directories.
    Subdirs(subdirs::SubdirsArgs),
    /// Copy a directory tree.
    Copy(copy::CopyArgs),
}

/// Dispatches `filekit dir <subcommand>`.
pub fn handle_dir(args: DirArgs) -> Result<()> {
    match args.command {
        DirCommand::List(args) => list::handle_list(args),
        DirCommand::Subdirs(args) => subdirs::handle_subdirs(args),
        DirCommand::Copy(args) => copy::handle_copy(args),
    }
}
