//! # Filekit
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! File-system helpers: encoding-aware text and byte I/O, directory tree
//! copies, filtered listings, separator-driven path parsing, byte-wise file
//! comparison and NEW/EDITED folder diffs.
//!
//! - `common::fs` holds the helpers themselves.
//! - `core` holds configuration and error types.
//! - `commands` holds the `filekit` command-line handlers built on top.
//!
pub mod commands;
pub mod common;
pub mod core;
