//! # Filekit Text File Operations
//!
//! File: cli/src/common/fs/text.rs
//!
//! ## Overview
//!
//! Encoding-aware text reads and writes, in-place find/replace, line
//! counting, and small stream helpers.
//!
//! - **`read_text`**: whole-file read. A byte-order mark in the file wins over
//!   the requested encoding.
//! - **`write_text`**: overwrite or append. A BOM is only written when the
//!   write starts at the beginning of the file.
//! - **`replace_in_file`**: read, replace every occurrence, write back.
//! - **`line_count`**: decodes the file, then counts `\n` / `\r\n` terminated
//!   lines, optionally skipping blank ones.
//!
//! ```no_run
//! use filekit::common::fs::{encoding::TextEncoding, text};
//! use std::path::Path;
//!
//! let path = Path::new("notes/today.txt");
//! text::write_text(path, "first\n", true, TextEncoding::Unicode)?;
//! text::write_text(path, "second\n", false, TextEncoding::Unicode)?;
//! assert_eq!(text::read_text(path, TextEncoding::Default)?, "first\nsecond\n");
//! assert_eq!(text::line_count(path, false)?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::fs::encoding::{decode_detecting_bom, TextEncoding};
use crate::common::fs::io::{ensure_parent_exists, open_read_stream, read_bytes};
use crate::core::error::{FilekitError, Result};
use std::fs::OpenOptions;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Opens a buffered reader over `path`.
pub fn open_text_reader(path: &Path) -> Result<BufReader<std::fs::File>> {
    open_read_stream(path).map(BufReader::new)
}

/// Reads the full contents of a file as text.
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = read_bytes(path)?;
    debug!("Decoding {:?} as {}", path, encoding);
    Ok(decode_detecting_bom(&bytes, encoding))
}

/// Writes `contents` to `path`.
///
/// With `overwrite` the file is replaced; otherwise the text is appended
/// (creating the file when needed). The parent directory is created first.
pub fn write_text(path: &Path, contents: &str, overwrite: bool, encoding: TextEncoding) -> Result<()> {
    ensure_parent_exists(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(overwrite)
        .append(!overwrite)
        .open(path)
        .map_err(|e| FilekitError::io(path, e))?;
    let at_start = file.metadata().map_err(|e| FilekitError::io(path, e))?.len() == 0;

    let mut payload = Vec::new();
    if at_start {
        payload.extend_from_slice(encoding.preamble());
    }
    payload.extend(encoding.encode(contents));

    file.write_all(&payload)
        .and_then(|_| file.flush())
        .map_err(|e| FilekitError::io(path, e))?;
    info!(
        "{} {} bytes ({}) to file: {:?}",
        if overwrite { "Wrote" } else { "Appended" },
        payload.len(),
        encoding,
        path
    );
    Ok(())
}

/// Replaces every occurrence of `find` with `replace` and rewrites the file.
pub fn replace_in_file(path: &Path, find: &str, replace: &str) -> Result<()> {
    let contents = read_text(path, TextEncoding::Default)?;
    write_text(path, &contents.replace(find, replace), true, TextEncoding::Default)
}

/// Counts the lines in a text file.
///
/// The file is decoded first (a BOM selects the encoding, UTF-8 otherwise), so
/// UTF-16 and UTF-32 files count the same as UTF-8 ones. A final line without a
/// terminator counts; a trailing newline does not add an empty line. With
/// `ignore_blank_lines`, whitespace-only lines are skipped.
pub fn line_count(path: &Path, ignore_blank_lines: bool) -> Result<usize> {
    let contents = read_text(path, TextEncoding::Default)?;
    let lines = contents
        .lines()
        .filter(|line| !ignore_blank_lines || !line.trim().is_empty())
        .count();
    debug!("Counted {} lines in {:?}", lines, path);
    Ok(lines)
}

/// Reads everything left in `reader` as UTF-8 text.
pub fn read_stream_to_string<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(FilekitError::stream)?;
    Ok(decode_detecting_bom(&bytes, TextEncoding::Default))
}

/// Writes `contents` to `writer` as UTF-8 and flushes it.
pub fn write_stream<W: Write>(mut writer: W, contents: &str) -> Result<()> {
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(FilekitError::stream)?;
    Ok(())
}
