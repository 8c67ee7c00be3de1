//! Sweep All - run `cargo clean` in every directory under a root
//!
//! This crate provides functionality for:
//! - Listing the direct children of a root directory
//! - Asking for confirmation before touching anything
//! - Running the cleanup command in each child on a worker pool

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweepError};
