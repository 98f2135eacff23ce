#![forbid(unsafe_code)]

//! bumpver: bump a manifest version and keep the lockfile in sync
//!
//! The manifest's `[package]` version is incremented by major, minor or
//! patch rules and written back in place. The matching `[[package]]` entry
//! in the lockfile, if any, is updated to the same version.

pub mod cli;
pub mod config;
pub mod edit;
pub mod error;
pub mod logging;
pub mod output;
pub mod types;

// Re-export error types for convenient access
pub use error::{BumpverError, ConfigError, ManifestError, VersionError};

// Re-export core domain types for convenient access
pub use types::{BumpKind, PackageName, Version, bump};
