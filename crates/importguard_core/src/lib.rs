//! Core utilities for importguard checks.
//!
//! This crate provides shared functionality for scanning Python source trees:
//! - Collecting source files under one or more roots in a stable order
//! - Expressing discovered paths relative to a base directory

mod collector;
mod constants;
mod paths;

// Re-export public API
pub use collector::{collect_from_roots, collect_source_files};
pub use constants::SOURCE_FILE_SUFFIX;
pub use paths::{display_path, relative_to};
