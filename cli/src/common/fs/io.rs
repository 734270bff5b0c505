//! # Filekit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Fundamental whole-file I/O: making sure directories exist, reading and
//! writing raw bytes, and opening read streams. Text-aware operations built
//! on top of these live in the sibling `text` module.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) when missing;
//!   rejects a path that exists but is not a directory.
//! - **`read_bytes`**: reads a whole file. The buffer is sized from the file's
//!   metadata first and then filled.
//! - **`write_bytes`**: creates the parent directory, then writes the file.
//! - **`open_read_stream`**: opens a file for streaming reads.
//!
//! Missing paths fail with `FilekitError::NotFound`; other platform failures
//! with `FilekitError::Io`.
//!
//! ```no_run
//! use filekit::common::fs::io;
//! use std::path::Path;
//!
//! io::write_bytes(Path::new("out/data.bin"), &[1, 2, 3])?;
//! assert_eq!(io::read_bytes(Path::new("out/data.bin"))?, vec![1, 2, 3]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{require_exists, FilekitError, Result};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates the directory and any missing parents. If the path already exists
/// but is not a directory, a `FilekitError::FileSystem` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| FilekitError::io(path, e))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(FilekitError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Ensures the parent directory of `path` exists. Bare file names have no
/// parent to create.
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}

/// Opens `path` for reading.
pub fn open_read_stream(path: &Path) -> Result<File> {
    require_exists(path)?;
    File::open(path).map_err(|e| FilekitError::io(path, e).into())
}

/// Reads the full contents of a file into a byte vector.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = open_read_stream(path)?;
    let len = file
        .metadata()
        .map_err(|e| FilekitError::io(path, e))?
        .len();
    let mut buffer = vec![0u8; len as usize];
    file.read_exact(&mut buffer)
        .map_err(|e| FilekitError::io(path, e))?;
    debug!("Read {} bytes from {:?}", len, path);
    Ok(buffer)
}

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_bytes(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_exists(path)?;
    fs::write(path, contents).map_err(|e| FilekitError::io(path, e))?;
    info!("Wrote {} bytes to file: {:?}", contents.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::is_not_found;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_already_exists() -> Result<()> {
        let base_dir = tempdir()?;
        let existing_dir = base_dir.path().join("existing");
        fs::create_dir(&existing_dir)?;
        ensure_dir_exists(&existing_dir)?;
        assert!(existing_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_then_read_bytes() -> Result<()> {
        let base_dir = tempdir()?;
        // Parent directories are created on demand.
        let file_path = base_dir.path().join("nested/dir/blob.bin");
        let content: Vec<u8> = (0..=255).collect();
        write_bytes(&file_path, &content)?;
        assert_eq!(read_bytes(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_read_empty_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("empty.bin");
        fs::write(&file_path, b"")?;
        assert!(read_bytes(&file_path)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_bytes_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let err = read_bytes(&base_dir.path().join("nonexistent.bin")).unwrap_err();
        assert!(is_not_found(&err));
        Ok(())
    }

    #[test]
    fn test_open_read_stream_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let err = open_read_stream(&base_dir.path().join("nope")).unwrap_err();
        assert!(is_not_found(&err));
        Ok(())
    }
}
