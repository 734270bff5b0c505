//! # Filekit Text Lines Command
//!
//! File: cli/src/commands/text/lines.rs
//!
use crate::common::fs::text::line_count;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct LinesArgs {
    /// File whose lines are counted.
    pub file: PathBuf,
    /// Skip lines that are empty or whitespace-only.
    #[arg(long)]
    pub ignore_blank: bool,
}

pub fn handle_lines(args: LinesArgs) -> Result<()> {
    println!("{}", line_count(&args.file, args.ignore_blank)?);
    Ok(())
}
