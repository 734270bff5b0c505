//! # Filekit Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Recursive copying of a directory tree into a destination directory.
//!
//! ## Architecture
//!
//! `copy_directory_tree` walks the tree itself, one level at a time:
//! 1. Create the destination directory if it is missing.
//! 2. Copy every file directly inside the source (via `fs_extra::file::copy`).
//! 3. Recurse into each sub-directory, targeting the same name under the
//!    destination.
//!
//! The first failure aborts the rest of the walk. Files copied before the
//! failure stay where they are; nothing is rolled back.
//!
//! By default an existing destination file is an error. Set
//! [`CopyOptions::overwrite`] to replace it instead.
//!
//! ## Usage
//!
//! ```no_run
//! use filekit::common::fs::copy::{self, CopyOptions};
//! use std::path::Path;
//!
//! copy::copy_directory_tree(
//!     Path::new("./site"),
//!     Path::new("./backup/site"),
//!     &CopyOptions { overwrite: true },
//! )?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::fs::io::ensure_dir_exists;
use crate::common::fs::listing::{list_files, sub_directories};
use crate::core::error::{require_dir, FilekitError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Options for tree copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Replace files that already exist at the destination.
    pub overwrite: bool,
}

/// Copies the tree rooted at `source` into `destination`.
///
/// # Errors
///
/// - `FilekitError::NotFound` if `source` does not exist, or
///   `FilekitError::NotADirectory` if it is not a directory. Nothing is
///   created at `destination` in either case.
/// - `FilekitError::Copy` / `FilekitError::Io` on the first file or directory
///   that cannot be copied or created.
pub fn copy_directory_tree(source: &Path, destination: &Path, options: &CopyOptions) -> Result<()> {
    require_dir(source)?;
    info!("Starting recursive copy from {:?} to {:?}", source, destination);
    let copied = copy_level(source, destination, options)?;
    info!(
        "Finished recursive copy from {:?} to {:?} ({} file(s))",
        source, destination, copied
    );
    Ok(())
}

/// Copies one directory level, then recurses. Returns the number of files copied.
fn copy_level(source: &Path, destination: &Path, options: &CopyOptions) -> Result<usize> {
    ensure_dir_exists(destination)?;

    let mut file_options = fs_extra::file::CopyOptions::new();
    file_options.overwrite = options.overwrite;

    let files = list_files(source)?;
    for file in &files {
        let target = destination.join(&file.name);
        debug!("Copying {:?} -> {:?}", file.path, target);
        fs_extra::file::copy(&file.path, &target, &file_options).map_err(|e| {
            FilekitError::Copy {
                from: file.path.clone(),
                to: target.clone(),
                message: e.to_string(),
            }
        })?;
    }

    let mut copied = files.len();
    for dir in sub_directories(source)? {
        // Directories from a listing always have a final component.
        let Some(name) = dir.file_name() else {
            continue;
        };
        copied += copy_level(&dir, &destination.join(name), options)?;
    }
    Ok(copied)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{is_io, is_not_found};
    use std::fs;
    use tempfile::tempdir;

    fn make_source(root: &Path) {
        fs::create_dir_all(root.join("docs/img")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("readme.txt"), "top").unwrap();
        fs::write(root.join("docs/guide.md"), "# guide").unwrap();
        fs::write(root.join("docs/img/logo.bin"), [1u8, 2, 3]).unwrap();
    }

    #[test]
    fn test_copy_tree_into_new_destination() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("out/dst");
        make_source(&src);

        copy_directory_tree(&src, &dst, &CopyOptions::default()).unwrap();

        assert_eq!(fs::read_to_string(dst.join("readme.txt")).unwrap(), "top");
        assert_eq!(fs::read_to_string(dst.join("docs/guide.md")).unwrap(), "# guide");
        assert_eq!(fs::read(dst.join("docs/img/logo.bin")).unwrap(), vec![1, 2, 3]);
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_existing_file_fails_without_overwrite() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        make_source(&src);
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("readme.txt"), "keep me").unwrap();

        let err = copy_directory_tree(&src, &dst, &CopyOptions::default()).unwrap_err();
        assert!(is_io(&err));
        assert_eq!(fs::read_to_string(dst.join("readme.txt")).unwrap(), "keep me");
        // The walk stopped before descending.
        assert!(!dst.join("docs").exists());
    }

    #[test]
    fn test_existing_file_replaced_with_overwrite() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        make_source(&src);
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("readme.txt"), "stale").unwrap();

        copy_directory_tree(&src, &dst, &CopyOptions { overwrite: true }).unwrap();
        assert_eq!(fs::read_to_string(dst.join("readme.txt")).unwrap(), "top");
    }

    #[test]
    fn test_file_source_is_rejected() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("single.txt");
        fs::write(&file, "alone").unwrap();
        let out = tmp.path().join("out");

        let err = copy_directory_tree(&file, &out, &CopyOptions::default()).unwrap_err();
        assert!(is_not_found(&err));
        assert!(!out.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_copied_as_content() {
        let tmp = tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::write(tmp.path().join("real.txt"), "linked").unwrap();
        std::os::unix::fs::symlink("../real.txt", src.join("link.txt")).unwrap();

        copy_directory_tree(&src, &dst, &CopyOptions::default()).unwrap();
        let copied = dst.join("link.txt");
        assert!(!fs::symlink_metadata(&copied).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&copied).unwrap(), "linked");
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let tmp = tempdir().unwrap();
        let err = copy_directory_tree(
            &tmp.path().join("nope"),
            &tmp.path().join("dst"),
            &CopyOptions::default(),
        )
        .unwrap_err();
        assert!(is_not_found(&err));
        assert!(!tmp.path().join("dst").exists());
    }
}
