//! # Filekit Dir List Command
//!
//! File: cli/src/commands/dir/list.rs
//!
//! ## Overview
//!
//! Implements `filekit dir list <DIR>`, printing a table of the matching files:
//!
//! ```text
//! Size       | Modified            | Path
//! -----------+---------------------+------------------------------
//! 1.2 KB     | 2026-10-02 09:14:55 | notes.txt
//! 512 B      | 2026-10-01 18:03:12 | drafts/idea.txt
//!
//! Found 2 file(s).
//! ```
//!
//! `--larger-than` keeps only files larger than the given number of bytes.
//!
use crate::common::fs::listing::{is_file_over_max_size, list_files_filtered, FileRecord, MATCH_ALL};
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory to list.
    pub directory: PathBuf,
    /// Search pattern matched against file names (e.g. '*.txt').
    #[arg(short, long, default_value = MATCH_ALL)]
    pub pattern: String,
    /// Include files in sub-directories.
    #[arg(short, long)]
    pub recursive: bool,
    /// Only show files larger than this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub larger_than: Option<u64>,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let mut records = list_files_filtered(&args.directory, &args.pattern, args.recursive)?;
    if let Some(max) = args.larger_than {
        records.retain(|r| is_file_over_max_size(r, max));
        debug!("{} file(s) over {} bytes", records.len(), max);
    }
    print_file_table(&records);
    Ok(())
}

fn print_file_table(records: &[FileRecord]) {
    if records.is_empty() {
        println!("No files found.");
        return;
    }
    println!("{:<10} | {:<19} | Path", "Size", "Modified");
    println!("{:-<11}+{:-<21}+{:-<30}", "", "", "");
    for record in records {
        println!(
            "{:<10} | {} | {}",
            human_readable_size(record.len),
            record.modified.format("%Y-%m-%d %H:%M:%S"),
            record.relative_path.display()
        );
    }
    println!("\nFound {} file(s).", records.len());
}

/// Formats a byte count using powers of 1024 (`0 B`, `512 B`, `1.5 KB`).
fn human_readable_size(size: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
    if size == 0 {
        return "0 B".to_string();
    }
    let base = 1024_f64;
    let exponent = ((size as f64).ln() / base.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = size as f64 / base.powi(exponent as i32);
    if exponent == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        format!("{:.1} {}", scaled, UNITS[exponent])
    }
}
