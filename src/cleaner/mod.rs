//! Listing, confirmation and parallel cleaning.
//!
//! This module provides:
//! - Enumeration of the direct children of a root directory
//! - The confirmation gate shown before any work starts
//! - Per-directory execution of the cleanup command
//! - Parallel dispatch over a worker pool

pub mod confirm;
pub mod enumerator;
mod executor;
mod orchestrator;

pub use confirm::confirm;
pub use enumerator::list_children;
pub use executor::{CleanExecutor, Cleanup, CleanupCommand};
pub use orchestrator::Dispatcher;
