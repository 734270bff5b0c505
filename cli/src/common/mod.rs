//! # Filekit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers and by library
//! callers. Today this is the filesystem layer; command-specific logic lives
//! in `commands::` and infrastructure (config, errors) in `core::`.
//!

/// Utilities for filesystem operations (paths, I/O, listings, copy, compare).
pub mod fs;
