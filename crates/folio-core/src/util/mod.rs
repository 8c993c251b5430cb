//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async content file listing and reading
//! - [`paths`]: Path helpers (tilde expansion)

pub mod files;
pub mod paths;
