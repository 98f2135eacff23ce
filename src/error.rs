//! Error types for bumpver
//!
//! Errors are layered the same way the tool works: version arithmetic,
//! manifest lookup, configuration, and finally file I/O. `BumpverError`
//! wraps all of them so the command layer can report a single message.

use std::path::PathBuf;

/// Version parsing and arithmetic errors
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Version string is not strict MAJOR.MINOR.PATCH
    #[error("Unsupported version format: {0}")]
    InvalidFormat(String),

    /// Bump kind is not one of major, minor, patch
    #[error("Invalid bump kind: {0} (expected major, minor or patch)")]
    InvalidBumpKind(String),

    /// Incrementing a component would exceed u64::MAX
    #[error("Cannot bump {component} of {version}: component overflow")]
    ComponentOverflow {
        component: &'static str,
        version: String,
    },
}

/// Manifest layout errors
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// No `[package]` header in the manifest
    #[error("[package] section not found in manifest")]
    SectionMissing,

    /// `[package]` exists but carries no `version = "X.Y.Z"` line
    #[error("version field not found in [package]")]
    VersionFieldMissing,
}

/// bumpver.toml errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be deserialized
    #[error("Invalid configuration syntax: {0}")]
    InvalidSyntax(String),

    /// Deserialized but semantically invalid
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Reading the configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::InvalidSyntax(err.message().to_string())
    }
}

/// Top-level error type for bumpver
#[derive(Debug, thiserror::Error)]
pub enum BumpverError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File access failure, tagged with the path involved
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BumpverError {
    /// Wraps an I/O error with the path that produced it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpverError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_display() {
        let err = VersionError::InvalidFormat("1.2".to_string());
        assert_eq!(err.to_string(), "Unsupported version format: 1.2");

        let err = VersionError::InvalidBumpKind("bogus".to_string());
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_manifest_error_passes_through_transparently() {
        let err: BumpverError = ManifestError::SectionMissing.into();
        assert_eq!(err.to_string(), "[package] section not found in manifest");
    }

    #[test]
    fn test_io_error_contains_path() {
        let err = BumpverError::io(
            "/tmp/project/Cargo.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/project/Cargo.toml"));
        assert!(msg.contains("not found"));
    }
}
