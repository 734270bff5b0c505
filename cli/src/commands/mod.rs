//! # Filekit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups of the `filekit` CLI.
//! Each group defines its own arguments struct and a `handle_*` function that
//! dispatches to the subcommand handlers in its submodules.
//!
//! ## Command Groups
//!
//! - `compare`: byte-wise file comparison and folder diffs
//! - `dir`: file listings, sub-directory listings, tree copies
//! - `text`: encoded reads/writes, line counts, find/replace
//! - `path`: separator-driven path parsing
//!

/// Command group for comparing files and folders. Subcommands: `files`, `folders`.
pub mod compare;
/// Command group for directory operations. Subcommands: `list`, `subdirs`, `copy`.
pub mod dir;
/// Command group for path-string parsing. Subcommands: `split`, `trailing`.
pub mod path;
/// Command group for text files. Subcommands: `read`, `write`, `lines`, `replace`.
pub mod text;

/// Resolves an `--x` / `--no-x` flag pair against the configured value. Clap
/// keeps only the last of the pair, so at most one is set.
pub(crate) fn flag_or_config(on: bool, off: bool, configured: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}
