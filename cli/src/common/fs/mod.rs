//! # Filekit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module is the entry point for every filesystem helper in filekit.
//! Functionality is split across focused submodules:
//!
//! - **`paths`**: string parsing of paths with a configurable separator (`PathStyle`).
//! - **`io`**: directory creation and whole-file byte I/O.
//! - **`encoding`**: the named text encodings and byte-order-mark handling.
//! - **`text`**: encoding-aware text reads/writes, find/replace, line counts.
//! - **`listing`**: `FileRecord` listings with search patterns, sub-directories.
//! - **`copy`**: recursive directory tree copies.
//! - **`compare`**: byte-wise file comparison and NEW/EDITED folder diffs.
//!
//! Callers import from the specific submodule, e.g.
//! `use filekit::common::fs::compare::diff_folders;`.
//!

/// Byte-wise comparison and folder diffs (`files_equal`, `diff_folders`).
pub mod compare;
/// Recursive directory copies (`copy_directory_tree`).
pub mod copy;
/// Named text encodings (`TextEncoding`).
pub mod encoding;
/// Directory creation and byte I/O (`ensure_dir_exists`, `read_bytes`, `write_bytes`).
pub mod io;
/// File and sub-directory listings (`list_files_filtered`, `FileRecord`).
pub mod listing;
/// Separator-driven path parsing (`PathStyle`).
pub mod paths;
/// Text file operations (`read_text`, `write_text`, `line_count`).
pub mod text;
