//! # Filekit Compare Command Group
//!
//! File: cli/src/commands/compare/mod.rs
//!
//! ## Overview
//!
//! Entry point and router for `filekit compare`. Defines the `files` and
//! `folders` subcommands and delegates to their handlers.
//!
//! ## Examples
//!
//! ```bash
//! # Are two files byte-for-byte identical? (exit code 0 = yes, 1 = no)
//! filekit compare files a.bin b.bin
//!
//! # Which files in ./incoming are new or edited relative to ./archive?
//! filekit compare folders ./incoming ./archive --recursive
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Implements `filekit compare files`.
mod files;
/// Implements `filekit compare folders`.
mod folders;

/// Arguments for the `filekit compare` command group.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    #[command(subcommand)]
    command: CompareCommand,
}

#[derive(Subcommand, Debug)]
enum CompareCommand {
    /// Compare two files byte for byte.
    Files(files::FilesArgs),
    /// List files in FIRST that are new or edited relative to SECOND.
    Folders(folders::FoldersArgs),
}

/// Dispatches `filekit compare <subcommand>`.
///
/// Returns `Ok(true)` when the comparison found no differences.
pub fn handle_compare(args: CompareArgs) -> Result<bool> {
    match args.command {
        CompareCommand::Files(args) => files::handle_files(args),
        CompareCommand::Folders(args) => folders::handle_folders(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_compare_files() {
        let result = CompareArgs::try_parse_from(["compare", "files", "a", "b"]);
        assert!(matches!(
            result.unwrap().command,
            CompareCommand::Files(_)
        ));
    }

    #[test]
    fn test_parses_compare_folders_with_flags() {
        let result = CompareArgs::try_parse_from([
            "compare",
            "folders",
            "one",
            "two",
            "--recursive",
            "--check-contents",
        ]);
        match result.unwrap().command {
            CompareCommand::Folders(args) => {
                assert!(args.recursive);
                assert!(args.check_contents);
            }
            _ => panic!("Incorrect subcommand parsed for 'folders'"),
        }
    }

    #[test]
    fn test_compare_files_requires_two_paths() {
        assert!(CompareArgs::try_parse_from(["compare", "files", "only-one"]).is_err());
    }
}
