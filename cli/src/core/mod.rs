//! # Filekit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command and library function:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ```rust
//! use filekit::core::config; // For loading configuration
//! use filekit::core::error::{FilekitError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
