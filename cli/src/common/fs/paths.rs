//! # Filekit Path-String Parsing
//!
//! File: cli/src/common/fs/paths.rs
//!
//! ## Overview
//!
//! String-level parsing of file paths into directory and file-name parts.
//! Unlike `std::path`, these helpers work on a single configured separator
//! character, so they handle Windows-style paths on any host (and vice versa).
//! They are not robust to mixed-separator input.
//!
//! ```rust
//! use filekit::common::fs::paths::PathStyle;
//!
//! let style = PathStyle::default(); // separator '\'
//! let (dir, name) = style.split_path(r"C:\data\report.txt");
//! assert_eq!(dir, r"C:\data");
//! assert_eq!(name, "report.txt");
//! assert_eq!(style.join(&dir, &name), r"C:\data\report.txt");
//! ```
//!

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '\\';

/// Path parsing rules: currently just the separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStyle {
    separator: char,
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle::new(DEFAULT_SEPARATOR)
    }
}

impl PathStyle {
    pub fn new(separator: char) -> Self {
        PathStyle { separator }
    }

    /// Style using the host platform's separator.
    pub fn native() -> Self {
        PathStyle::new(std::path::MAIN_SEPARATOR)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Splits `full_path` into `(directory, file_name)`.
    ///
    /// The directory is every segment except the last, rejoined with the
    /// separator (drive or root segment included). A path without any
    /// separator has an empty directory. Empty segments stay empty strings.
    pub fn split_path(&self, full_path: &str) -> (String, String) {
        match full_path.rfind(self.separator) {
            Some(idx) => (
                full_path[..idx].to_string(),
                full_path[idx + self.separator.len_utf8()..].to_string(),
            ),
            None => (String::new(), full_path.to_string()),
        }
    }

    /// Rejoins a directory and a file name.
    ///
    /// Inverse of [`split_path`](Self::split_path) except for a file directly
    /// under the root: `\x` splits to `("", "x")`, the same as `x`, so joining
    /// it back gives `x` without the leading separator.
    pub fn join(&self, directory: &str, file_name: &str) -> String {
        if directory.is_empty() {
            return file_name.to_string();
        }
        format!("{}{}{}", directory, self.separator, file_name)
    }

    /// Directory portion of a file path, drive letter included.
    pub fn directory_from_path(&self, full_path: &str) -> String {
        self.split_path(full_path).0
    }

    /// File-name portion of a file path.
    pub fn file_name_from_path(&self, full_path: &str) -> String {
        self.split_path(full_path).1
    }

    /// Last folder name of a directory path (`C:\a\b` -> `b`).
    ///
    /// A trailing separator yields an empty name, matching `file_name_from_path`.
    pub fn folder_name_from_directory_path(&self, full_path: &str) -> String {
        self.split_path(full_path).1
    }

    /// Appends the separator unless `path` already ends with it.
    pub fn ensure_trailing_separator(&self, path: &str) -> String {
        if path.ends_with(self.separator) {
            path.to_string()
        } else {
            format!("{}{}", path, self.separator)
        }
    }
}
