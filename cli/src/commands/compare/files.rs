//! # Filekit Compare Files Command
//!
//! File: cli/src/commands/compare/files.rs
//!
//! Implements `filekit compare files <FIRST> <SECOND>`: prints `identical` or
//! `different` and reports the verdict through the exit status.
//!
use crate::common::fs::compare::files_equal;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// First file.
    pub first: PathBuf,
    /// Second file.
    pub second: PathBuf,
}

pub fn handle_files(args: FilesArgs) -> Result<bool> {
    info!("Comparing {:?} with {:?}", args.first, args.second);
    let equal = files_equal(&args.first, &args.second)?;
    println!("{}", if equal { "identical" } else { "different" });
    Ok(equal)
}
