//! # Filekit Compare Folders Command
//!
//! File: cli/src/commands/compare/folders.rs
//!
//! ## Overview
//!
//! Implements `filekit compare folders <FIRST> <SECOND>`, printing one line
//! per file of FIRST that is new or edited relative to SECOND:
//!
//! ```text
//! NEW     reports/q3.csv
//! EDITED  summary.txt
//!
//! 2 new or edited file(s).
//! ```
//!
//! `--recursive` and `--check-contents` fall back to the `[diff]` section of
//! the configuration when not given; `--no-recursive` and
//! `--no-check-contents` switch a configured `true` off. `--check-contents` skips the byte
//! comparison of equal-length files (see `common::fs::compare`).
//!
use crate::commands::flag_or_config;
use crate::common::fs::compare::{diff_folders, DiffOptions};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct FoldersArgs {
    /// Folder whose files are classified.
    pub first: PathBuf,
    /// Folder to compare against.
    pub second: PathBuf,
    /// Include sub-directories, matching files by relative path.
    #[arg(short, long, overrides_with = "no_recursive")]
    pub recursive: bool,
    /// Only compare top-level files, even if the configuration says otherwise.
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,
    /// Skip the byte comparison of files whose lengths match.
    #[arg(long, overrides_with = "no_check_contents")]
    pub check_contents: bool,
    /// Byte-compare equal-length files, even if the configuration says otherwise.
    #[arg(long, overrides_with = "check_contents")]
    pub no_check_contents: bool,
}


pub fn handle_folders(args: FoldersArgs) -> Result<bool> {
    let cfg = config::load_config().context("Failed to load filekit configuration")?;
    let options = DiffOptions {
        recursive: flag_or_config(args.recursive, args.no_recursive, cfg.diff.recursive),
        check_contents: flag_or_config(
            args.check_contents,
            args.no_check_contents,
            cfg.diff.check_contents,
        ),
    };

    let diff = diff_folders(&args.first, &args.second, &options).with_context(|| {
        format!(
            "Failed to compare '{}' with '{}'",
            args.first.display(),
            args.second.display()
        )
    })?;

    for (record, status) in diff.iter() {
        println!("{:<7} {}", status, record.relative_path.display());
    }
    if !diff.is_empty() {
        println!();
    }
    println!("{} new or edited file(s).", diff.len());
    Ok(diff.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_of_a_flag_pair_wins() {
        let args = FoldersArgs::try_parse_from([
            "folders",
            "a",
            "b",
            "--check-contents",
            "--no-check-contents",
        ])
        .unwrap();
        assert!(!args.check_contents);
        assert!(args.no_check_contents);
    }
}
