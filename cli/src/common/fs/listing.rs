//! # Filekit Directory Listings
//!
//! File: cli/src/common/fs/listing.rs
//!
//! ## Overview
//!
//! Produces [`FileRecord`] snapshots for the files in a directory, optionally
//! filtered by a search pattern and optionally descending into
//! sub-directories. Also lists immediate sub-directories.
//!
//! ## Architecture
//!
//! - Traversal uses `walkdir`, sorted by file name so listings are stable.
//! - Search patterns (`*.txt`, `report-??.csv`, `*.{png,jpg}`) are compiled with
//!   `globset` and matched against the file name only, never the directory.
//! - Each record carries its path relative to the listing root (via
//!   `pathdiff`) so recursive listings of two roots can be matched up.
//!
//! Symlinks to files are listed like the files they point at (the record
//! carries the target's length and modification time). A missing directory
//! fails with `FilekitError::NotFound`, and a path that is not a directory
//! with `FilekitError::NotADirectory`.
//!
//! ```no_run
//! use filekit::common::fs::listing;
//! use std::path::Path;
//!
//! for record in listing::list_files_filtered(Path::new("logs"), "*.log", true)? {
//!     println!("{} {} bytes", record.relative_path.display(), record.len);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::core::error::{require_dir, FilekitError, Result};
use chrono::{DateTime, Local};
use globset::{Glob, GlobMatcher};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Pattern that matches every file.
pub const MATCH_ALL: &str = "*";

/// Metadata snapshot of one file, taken at listing time.
///
/// Two records are equal when they point at the same path; the remaining
/// fields describe the file as it was when listed.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Full path of the file.
    pub path: PathBuf,
    /// File name, used for display and for top-level matching.
    pub name: String,
    /// Path relative to the directory that was listed.
    pub relative_path: PathBuf,
    /// Length in bytes.
    pub len: u64,
    /// Last modification time.
    pub modified: DateTime<Local>,
}

impl FileRecord {
    /// Reads the metadata of `path` into a record rooted at `root`.
    pub fn from_path(root: &Path, path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| FilekitError::io(path, e))?;
        let modified = metadata
            .modified()
            .map_err(|e| FilekitError::io(path, e))?;
        let relative_path = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
        Ok(FileRecord {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            relative_path,
            len: metadata.len(),
            modified: DateTime::<Local>::from(modified),
        })
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileRecord {}

impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for FileRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

/// Lists the top-level files of `dir`.
pub fn list_files(dir: &Path) -> Result<Vec<FileRecord>> {
    list_files_filtered(dir, MATCH_ALL, false)
}

/// Lists files in `dir` whose name matches `pattern`.
///
/// An empty pattern matches everything. With `recursive`, files in every
/// sub-directory are included as well.
pub fn list_files_filtered(dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<FileRecord>> {
    require_dir(dir)?;
    let matcher = compile_pattern(pattern)?;

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut records = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if !is_file_entry(&entry) {
            continue;
        }
        if !matcher.is_match(entry.file_name()) {
            continue;
        }
        records.push(FileRecord::from_path(dir, entry.path())?);
    }
    debug!(
        "Listed {} file(s) in {:?} (pattern '{}', recursive: {})",
        records.len(),
        dir,
        pattern,
        recursive
    );
    Ok(records)
}

/// Lists the immediate sub-directories of `dir`, sorted by name.
pub fn sub_directories(dir: &Path) -> Result<Vec<PathBuf>> {
    require_dir(dir)?;
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// True when the recorded length is strictly greater than `max_len`.
pub fn is_file_over_max_size(record: &FileRecord, max_len: u64) -> bool {
    record.len > max_len
}

/// Regular files, plus symlinks that resolve to one. Links to directories are
/// not descended into.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    let pattern = if pattern.trim().is_empty() {
        MATCH_ALL
    } else {
        pattern
    };
    let glob = Glob::new(pattern).map_err(|e| FilekitError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    Ok(glob.compile_matcher())
}

fn walk_error(root: &Path, err: walkdir::Error) -> FilekitError {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(io_err) => FilekitError::io(&path, io_err),
        None => FilekitError::FileSystem(format!("Filesystem loop detected under {:?}", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::is_not_found;
    use std::fs;
    use tempfile::tempdir;

    fn sample_tree() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "bbb").unwrap();
        fs::write(dir.path().join("a.txt"), "aaaaa").unwrap();
        fs::write(dir.path().join("image.png"), [0u8; 4]).unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "c").unwrap();
        fs::write(dir.path().join("nested/deeper/d.txt"), "dd").unwrap();
        dir
    }

    fn names(records: &[FileRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_list_files_top_level_only() {
        let dir = sample_tree();
        let records = list_files(dir.path()).unwrap();
        assert_eq!(names(&records), vec!["a.txt", "b.txt", "image.png"]);
        assert_eq!(records[0].len, 5);
        assert_eq!(records[0].relative_path, PathBuf::from("a.txt"));
        assert_eq!(records[0].path, dir.path().join("a.txt"));
    }

    #[test]
    fn test_list_files_filtered_recursive() {
        let dir = sample_tree();
        let records = list_files_filtered(dir.path(), "*.txt", true).unwrap();
        let rel: Vec<PathBuf> = records.iter().map(|r| r.relative_path.clone()).collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("nested/c.txt"),
                PathBuf::from("nested/deeper/d.txt"),
            ]
        );
    }

    #[test]
    fn test_pattern_matches_file_name_only() {
        let dir = sample_tree();
        let records = list_files_filtered(dir.path(), "nested*", true).unwrap();
        assert!(records.is_empty());
        let records = list_files_filtered(dir.path(), "", false).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = sample_tree();
        let err = list_files_filtered(dir.path(), "[", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FilekitError>(),
            Some(FilekitError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let err = list_files(&dir.path().join("absent")).unwrap_err();
        assert!(is_not_found(&err));
        let err = sub_directories(&dir.path().join("absent")).unwrap_err();
        assert!(is_not_found(&err));
    }

    #[test]
    fn test_file_path_is_rejected() {
        let dir = sample_tree();
        let file = dir.path().join("a.txt");
        for err in [
            list_files(&file).unwrap_err(),
            list_files_filtered(&file, "*.txt", true).unwrap_err(),
            sub_directories(&file).unwrap_err(),
        ] {
            assert!(matches!(
                err.downcast_ref::<FilekitError>(),
                Some(FilekitError::NotADirectory { .. })
            ));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_listed() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(dir.path().join("real.txt"), "target").unwrap();
        std::os::unix::fs::symlink("../real.txt", src.join("link.txt")).unwrap();
        std::os::unix::fs::symlink("../missing.txt", src.join("dangling.txt")).unwrap();

        let records = list_files(&src).unwrap();
        assert_eq!(names(&records), vec!["link.txt"]);
        assert_eq!(records[0].len, 6);
        assert_eq!(records[0].path, src.join("link.txt"));
    }

    #[test]
    fn test_sub_directories() {
        let dir = sample_tree();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        let subdirs = sub_directories(dir.path()).unwrap();
        assert_eq!(
            subdirs,
            vec![dir.path().join("alpha"), dir.path().join("nested")]
        );
    }

    #[test]
    fn test_is_file_over_max_size() {
        let dir = sample_tree();
        let record = FileRecord::from_path(dir.path(), &dir.path().join("a.txt")).unwrap();
        assert!(is_file_over_max_size(&record, 4));
        assert!(!is_file_over_max_size(&record, 5));
        assert!(!is_file_over_max_size(&record, 100));
    }

    #[test]
    fn test_record_identity_is_path() {
        let dir = sample_tree();
        let path = dir.path().join("b.txt");
        let first = FileRecord::from_path(dir.path(), &path).unwrap();
        fs::write(&path, "changed length").unwrap();
        let second = FileRecord::from_path(dir.path(), &path).unwrap();
        assert_ne!(first.len, second.len);
        assert_eq!(first, second);
    }
}
