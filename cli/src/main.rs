//! # Filekit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `filekit` CLI. It:
//! - parses command-line arguments with Clap
//! - sets up logging based on the verbosity flag (or `RUST_LOG`)
//! - routes execution to the command group handlers in `filekit::commands`
//!
//! ## Examples
//!
//! ```bash
//! filekit --help
//! filekit -vv compare folders ./incoming ./archive
//! ```
//!
//! Exit status: `0` on success, `1` when a comparison finds differences or a
//! command fails.
//!
use clap::Parser;
use filekit::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "filekit",
    about = "filekit: file-system helpers for text, trees, listings and diffs",
    long_about = "Read and write encoded text, copy directory trees, list files, \n\
                  parse paths, and compare files or whole folders.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All top-level command groups.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Compare(commands::compare::CompareArgs),
    #[command(alias = "d")]
    Dir(commands::dir::DirArgs),
    #[command(alias = "t")]
    Text(commands::text::TextArgs),
    #[command(alias = "p")]
    Path(commands::path::PathArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Compare(args) => commands::compare::handle_compare(args),
        Commands::Dir(args) => commands::dir::handle_dir(args).map(|_| true),
        Commands::Text(args) => commands::text::handle_text(args).map(|_| true),
        Commands::Path(args) => commands::path::handle_path(args).map(|_| true),
    };

    match command_result {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
