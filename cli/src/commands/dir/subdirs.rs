//! # Filekit Dir Subdirs Command
//!
//! File: cli/src/commands/dir/subdirs.rs
//!
//! Implements `filekit dir subdirs <DIR>`: one sub-directory path per line.
//!
use crate::common::fs::listing::sub_directories;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct SubdirsArgs {
    /// Directory whose children are listed.
    pub directory: PathBuf,
}

pub fn handle_subdirs(args: SubdirsArgs) -> Result<()> {
    for dir in sub_directories(&args.directory)? {
        println!("{}", dir.display());
    }
    Ok(())
}
