//! Bump command implementation
//!
//! This module implements the whole run:
//! - Reads the manifest and extracts the `[package]` version
//! - Computes the next version for the requested kind
//! - Rewrites and persists the manifest
//! - Patches the lockfile entry on a best-effort basis
//! - Prints the optional lockfile line followed by the new version

use crate::cli::ColorChoice;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, read_document, resolve, write_document};
use crate::config::Config;
use crate::edit::{locate_and_extract_version, package_name, patch_lockfile_file, rewrite_manifest};
use crate::error::{BumpverError, ConfigError};
use crate::output::{self, BumpOutcome};
use crate::types::PackageName;
use std::path::{Path, PathBuf};

/// Inputs to the bump command, independent of how they were parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOptions {
    /// Bump kind as given on the command line
    pub kind: String,
    pub root: PathBuf,
    /// Overrides `bumpver.manifest`
    pub manifest_path: Option<PathBuf>,
    /// Overrides `bumpver.lockfile`
    pub lockfile: Option<PathBuf>,
    /// Overrides `bumpver.package` and the manifest's own name
    pub package: Option<String>,
    pub dry_run: bool,
}

impl BumpOptions {
    /// Options for bumping `kind` in `root` with every default
    pub fn new(kind: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        BumpOptions {
            kind: kind.into(),
            root: root.into(),
            manifest_path: None,
            lockfile: None,
            package: None,
            dry_run: false,
        }
    }
}

/// Run the bump command
///
/// Prints the outcome on stdout, or `Error: ...` on stderr.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Error (invalid kind or version, malformed manifest, config or I/O failure)
pub fn run_bump(options: &BumpOptions, color: ColorChoice) -> i32 {
    match execute(options) {
        Ok(outcome) => {
            print!("{}", outcome.render());
            EXIT_SUCCESS
        }
        Err(e) => {
            output::print_error(color, &e);
            EXIT_ERROR
        }
    }
}

/// Performs the bump and returns what changed, without printing
pub fn execute(options: &BumpOptions) -> Result<BumpOutcome, BumpverError> {
    let config = Config::load_or_default(&options.root)?;

    let manifest_path = resolve(
        &options.root,
        options
            .manifest_path
            .as_deref()
            .unwrap_or(&config.bumpver.manifest),
    );
    let lockfile_path = resolve(
        &options.root,
        options.lockfile.as_deref().unwrap_or(&config.bumpver.lockfile),
    );

    // 1. Extract the current version
    let manifest = read_document(&manifest_path)?;
    let found = locate_and_extract_version(&manifest)?;
    tracing::debug!(path = %manifest_path.display(), version = %found.current, "found package version");

    // 2. Validate everything before touching any file
    let new_version = crate::types::bump(&found.current, &options.kind)?;
    let target = lockfile_target(options, &config, &manifest)?;

    // 3. Rewrite and persist the manifest
    let rewritten = rewrite_manifest(&manifest, &found.section, &new_version)?;
    if options.dry_run {
        tracing::info!(path = %manifest_path.display(), "dry run, manifest not written");
    } else {
        write_document(&manifest_path, &rewritten)?;
        tracing::info!(
            path = %manifest_path.display(),
            from = %found.current,
            to = %new_version,
            "manifest updated"
        );
    }

    // 4. Keep the lockfile entry in sync
    let lockfile_changed = match target {
        Some(name) => {
            patch_lockfile_file(&lockfile_path, name.as_str(), &new_version, options.dry_run)?
        }
        None => {
            tracing::warn!(
                path = %manifest_path.display(),
                "no package name to match in the lockfile, skipping"
            );
            false
        }
    };

    Ok(BumpOutcome {
        previous: found.current,
        new_version,
        lockfile_changed,
    })
}

/// Picks the lockfile entry name: CLI flag, then config, then manifest
fn lockfile_target(
    options: &BumpOptions,
    config: &Config,
    manifest: &str,
) -> Result<Option<PackageName>, ConfigError> {
    if let Some(name) = &options.package {
        return PackageName::new(name.as_str())
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "--package".to_string(),
                message: format!("'{}' is not a valid package name", name),
            });
    }

    if let Some(name) = &config.bumpver.package {
        return Ok(Some(name.clone()));
    }

    Ok(package_name(manifest).and_then(PackageName::new))
}

/// Convenience wrapper for callers holding only a root and a kind
pub fn bump_in(root: &Path, kind: &str) -> Result<BumpOutcome, BumpverError> {
    execute(&BumpOptions::new(kind, root))
}
