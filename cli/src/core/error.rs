//! # Filekit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout filekit. Every
//! operation returns the crate-wide [`Result`] alias (`anyhow::Result`), and
//! the failures callers need to tell apart are raised as [`FilekitError`]
//! variants inside it.
//!
//! ## Architecture
//!
//! - `FilekitError`: a `thiserror` enum for the domain error kinds.
//! - `Result<T>`: a type alias for `anyhow::Result<T>` so call sites can add
//!   context with `anyhow::Context`.
//!
//! The two kinds every operation can produce are `NotFound` (the path did not
//! exist when the call was made) and `Io` (the platform failed a read, write
//! or copy). Neither is retried.
//!
//! ## Examples
//!
//! ```rust
//! use filekit::core::error::{is_not_found, FilekitError};
//!
//! match filekit::common::fs::io::read_bytes(std::path::Path::new("missing.bin")) {
//!     Ok(bytes) => println!("{} bytes", bytes.len()),
//!     Err(e) if is_not_found(&e) => println!("nothing to read"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```
//!
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Custom error type for filekit.
#[derive(Error, Debug)]
pub enum FilekitError {
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Stream I/O error: {source}")]
    Stream {
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy '{}' to '{}': {message}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    #[error("Invalid search pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FilekitError {
    /// Builds a `NotFound` error for `path`.
    pub fn not_found(path: &Path) -> Self {
        FilekitError::NotFound {
            path: path.to_path_buf(),
        }
    }

    /// Wraps an `io::Error` raised while operating on `path`.
    ///
    /// An `io::ErrorKind::NotFound` is reported as `NotFound` so callers only
    /// have one variant to check for missing paths.
    pub fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        FilekitError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps an `io::Error` raised by a reader or writer with no backing path.
    pub fn stream(source: io::Error) -> Self {
        FilekitError::Stream { source }
    }
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;

/// Returns true when `err` carries a `FilekitError::NotFound`, or a
/// `NotADirectory` where a directory was required.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<FilekitError>(),
        Some(FilekitError::NotFound { .. } | FilekitError::NotADirectory { .. })
    )
}

/// Returns true when `err` carries a platform I/O, stream or copy failure.
pub fn is_io(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<FilekitError>(),
        Some(FilekitError::Io { .. } | FilekitError::Stream { .. } | FilekitError::Copy { .. })
    )
}

/// Fails with `NotFound` unless `path` exists.
pub fn require_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FilekitError::not_found(path).into());
    }
    Ok(())
}

/// Fails with `NotFound` if `path` is missing, or `NotADirectory` if it is
/// anything other than a directory.
pub fn require_dir(path: &Path) -> Result<()> {
    require_exists(path)?;
    if !path.is_dir() {
        return Err(FilekitError::NotADirectory {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
