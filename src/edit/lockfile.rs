#![forbid(unsafe_code)]

//! Lockfile entry patching
//!
//! A lockfile is a sequence of `[[package]]` blocks. A block runs from the
//! end of its header to the next line starting with `[[` or to the end of
//! the document. Every block declaring the target name gets its first
//! version line rewritten.

use crate::edit::splice;
use crate::error::BumpverError;
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

static BLOCK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[\[package\]\]").expect("block header pattern is valid"));

static NEXT_ARRAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[\[").expect("array header pattern is valid"));

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^version[ \t]*=[ \t]*"([0-9]+\.[0-9]+\.[0-9]+)"[ \t]*\r?$"#)
        .expect("version line pattern is valid")
});

/// Outcome of patching a lockfile document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfilePatch {
    pub text: String,
    /// Number of blocks whose name matched and whose version changed
    pub updated: usize,
}

impl LockfilePatch {
    pub fn changed(&self) -> bool {
        self.updated > 0
    }
}

/// Rewrites the version of every `[[package]]` block named `target_name`
///
/// Returns the new text and whether anything changed. A block that already
/// carries `new_version`, or has no strict `X.Y.Z` version line, is left
/// alone, so patching twice with the same version reports no change.
pub fn patch_lockfile(text: &str, target_name: &str, new_version: &str) -> (String, bool) {
    let patch = patch_blocks(text, target_name, new_version);
    let changed = patch.changed();
    (patch.text, changed)
}

/// Same as [`patch_lockfile`] but reports how many blocks were updated
pub fn patch_blocks(text: &str, target_name: &str, new_version: &str) -> LockfilePatch {
    let mut edits = Vec::new();

    // Duplicate names are all updated. A real lockfile can legitimately pin
    // one name at several versions, in which case this overwrites entries
    // that were not ours; callers are warned when it happens.
    for block in blocks(text) {
        if !declares_name(&text[block.clone()], target_name) {
            continue;
        }
        let Some(value) = version_value(text, &block) else {
            tracing::debug!(
                package = target_name,
                offset = block.start,
                "matching lockfile block has no version line"
            );
            continue;
        };
        if &text[value.clone()] != new_version {
            edits.push(value);
        }
    }

    if edits.len() > 1 {
        tracing::warn!(
            package = target_name,
            blocks = edits.len(),
            "updated several lockfile entries with the same name"
        );
    }

    LockfilePatch {
        text: splice(text, &edits, new_version),
        updated: edits.len(),
    }
}

/// Patches the lockfile at `path`, writing it back only when it changed
///
/// A missing lockfile is not an error and reports no change. With `dry_run`
/// set the patch is computed but the file is never written.
pub fn patch_lockfile_file(
    path: &Path,
    target_name: &str,
    new_version: &str,
    dry_run: bool,
) -> Result<bool, BumpverError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no lockfile, skipping");
            return Ok(false);
        }
        Err(e) => return Err(BumpverError::io(path, e)),
    };

    let patch = patch_blocks(&text, target_name, new_version);
    if !patch.changed() {
        tracing::info!(path = %path.display(), package = target_name, "lockfile already in sync");
        return Ok(false);
    }

    if dry_run {
        tracing::info!(path = %path.display(), "dry run, lockfile not written");
    } else {
        std::fs::write(path, &patch.text).map_err(|e| BumpverError::io(path, e))?;
        tracing::info!(
            path = %path.display(),
            blocks = patch.updated,
            version = new_version,
            "lockfile updated"
        );
    }

    Ok(true)
}

fn blocks(text: &str) -> Vec<Range<usize>> {
    BLOCK_HEADER
        .find_iter(text)
        .map(|header| {
            let end = NEXT_ARRAY_HEADER
                .find_at(text, header.end())
                .map(|m| m.start())
                .unwrap_or(text.len());
            header.end()..end
        })
        .collect()
}

/// True if `block` has a line `name = "<name>"`, trailing whitespace allowed
fn declares_name(block: &str, name: &str) -> bool {
    block.lines().any(|line| {
        let Some(rest) = line.strip_prefix("name") else {
            return false;
        };
        let Some(rest) = rest.trim_start_matches([' ', '\t']).strip_prefix('=') else {
            return false;
        };
        let value = rest.trim_start_matches([' ', '\t']).trim_end();
        value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .is_some_and(|v| v == name)
    })
}

fn version_value(text: &str, block: &Range<usize>) -> Option<Range<usize>> {
    let caps = VERSION_LINE.captures_at(text, block.start)?;
    if caps.get(0)?.start() >= block.end {
        return None;
    }
    caps.get(1).map(|m| m.range())
}
