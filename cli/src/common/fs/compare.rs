//! # Filekit File Comparison & Folder Diff
//!
//! File: cli/src/common/fs/compare.rs
//!
//! ## Overview
//!
//! Two related operations:
//!
//! - **`files_equal`**: byte-for-byte comparison of two files.
//! - **`diff_folders`**: classifies each file of a first folder as
//!   [`FileStatus::New`] or [`FileStatus::Edited`] relative to a second folder.
//!   Unchanged files are simply absent from the result.
//!
//! ## Architecture
//!
//! `files_equal` short-circuits on identical paths (no file is opened), then
//! on differing lengths, and only then streams both files through buffered
//! readers, stopping at the first mismatching chunk.
//!
//! `diff_folders` lists both folders with [`list_files_filtered`], matches by
//! file name (or by relative path when recursive), and decides:
//!
//! | second folder            | `check_contents` | result                     |
//! |--------------------------|------------------|----------------------------|
//! | no match                 | any              | `New`                      |
//! | different length         | any              | `Edited`                   |
//! | same length              | `false`          | `Edited` if bytes differ   |
//! | same length              | `true`           | unchanged (no byte check)  |
//!
//! The `check_contents` column reads backwards: the byte comparison runs when
//! the flag is **false**. That is how existing callers rely on it, so it is
//! kept as-is.
//!
//! ```no_run
//! use filekit::common::fs::compare::{diff_folders, DiffOptions};
//! use std::path::Path;
//!
//! let diff = diff_folders(Path::new("incoming"), Path::new("archive"), &DiffOptions::default())?;
//! for (record, status) in diff.iter() {
//!     println!("{status:7} {}", record.name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::fs::listing::{list_files_filtered, FileRecord, MATCH_ALL};
use crate::core::error::{require_exists, FilekitError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Classification of a first-folder file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileStatus {
    /// No file with the same name in the second folder.
    New,
    /// Same name, different length or contents.
    Edited,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            FileStatus::New => "NEW",
            FileStatus::Edited => "EDITED",
        })
    }
}

/// Options for [`diff_folders`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Include files in sub-directories, matched by relative path.
    pub recursive: bool,
    /// When `true`, equal-length files are NOT byte-compared (see module docs).
    pub check_contents: bool,
}

/// Result of a folder diff: first-folder records mapped to their status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderDiff {
    entries: BTreeMap<FileRecord, FileStatus>,
}

impl FolderDiff {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by path.
    pub fn iter(&self) -> impl Iterator<Item = (&FileRecord, &FileStatus)> {
        self.entries.iter()
    }

    /// Status of the file whose relative path is `relative_path`.
    pub fn status_of(&self, relative_path: impl AsRef<Path>) -> Option<FileStatus> {
        let wanted = relative_path.as_ref();
        self.entries
            .iter()
            .find(|(record, _)| record.relative_path == wanted)
            .map(|(_, status)| *status)
    }

    /// Records with the given status.
    pub fn with_status(&self, status: FileStatus) -> impl Iterator<Item = &FileRecord> {
        self.entries
            .iter()
            .filter(move |(_, s)| **s == status)
            .map(|(record, _)| record)
    }

    pub fn into_map(self) -> BTreeMap<FileRecord, FileStatus> {
        self.entries
    }
}

/// Compares two files byte for byte.
///
/// # Errors
///
/// `FilekitError::NotFound` if either file is missing (unless both paths are
/// the same), `FilekitError::Io` if a read fails part-way.
pub fn files_equal(first: &Path, second: &Path) -> Result<bool> {
    if first == second {
        return Ok(true);
    }
    require_exists(first)?;
    require_exists(second)?;

    let (file_a, len_a) = open_with_len(first)?;
    let (file_b, len_b) = open_with_len(second)?;
    if len_a != len_b {
        debug!("Length mismatch: {:?} ({}) vs {:?} ({})", first, len_a, second, len_b);
        return Ok(false);
    }

    let mut reader_a = BufReader::new(file_a);
    let mut reader_b = BufReader::new(file_b);
    loop {
        let chunk_a = reader_a.fill_buf().map_err(|e| FilekitError::io(first, e))?;
        let chunk_b = reader_b.fill_buf().map_err(|e| FilekitError::io(second, e))?;
        match (chunk_a.is_empty(), chunk_b.is_empty()) {
            (true, true) => return Ok(true),
            (true, false) | (false, true) => return Ok(false),
            (false, false) => {}
        }
        let n = chunk_a.len().min(chunk_b.len());
        if chunk_a[..n] != chunk_b[..n] {
            return Ok(false);
        }
        reader_a.consume(n);
        reader_b.consume(n);
    }
}

fn open_with_len(path: &Path) -> Result<(File, u64)> {
    let file = File::open(path).map_err(|e| FilekitError::io(path, e))?;
    let len = file.metadata().map_err(|e| FilekitError::io(path, e))?.len();
    Ok((file, len))
}

/// Classifies the files of `first` relative to `second`.
pub fn diff_folders(first: &Path, second: &Path, options: &DiffOptions) -> Result<FolderDiff> {
    info!(
        "Comparing folder {:?} against {:?} (recursive: {}, check_contents: {})",
        first, second, options.recursive, options.check_contents
    );
    let first_files = list_files_filtered(first, MATCH_ALL, options.recursive)?;
    let second_files = list_files_filtered(second, MATCH_ALL, options.recursive)?;

    let key = |record: &FileRecord| -> PathBuf {
        if options.recursive {
            record.relative_path.clone()
        } else {
            PathBuf::from(&record.name)
        }
    };
    let second_by_key: HashMap<PathBuf, &FileRecord> =
        second_files.iter().map(|r| (key(r), r)).collect();

    let mut entries = BTreeMap::new();
    for record in first_files {
        let status = match second_by_key.get(&key(&record)) {
            None => Some(FileStatus::New),
            Some(other) if other.len != record.len => Some(FileStatus::Edited),
            Some(other) if !options.check_contents => {
                if files_equal(&record.path, &other.path)? {
                    None
                } else {
                    Some(FileStatus::Edited)
                }
            }
            Some(_) => None,
        };
        if let Some(status) = status {
            debug!("{} {:?}", status, record.relative_path);
            entries.insert(record, status);
        }
    }
    info!("Folder diff found {} new or edited file(s)", entries.len());
    Ok(FolderDiff { entries })
}
