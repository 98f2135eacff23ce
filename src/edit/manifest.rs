#![forbid(unsafe_code)]

//! Manifest version lookup and rewrite
//!
//! Only the first `[package]` section is considered. The section runs from
//! the end of its header to the next line starting with `[` (any table or
//! array-of-tables header) or to the end of the document.

use crate::edit::splice;
use crate::error::ManifestError;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static PACKAGE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[package\]").expect("package header pattern is valid"));

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[").expect("section header pattern is valid"));

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^version[ \t]*=[ \t]*"([0-9]+\.[0-9]+\.[0-9]+)""#)
        .expect("version line pattern is valid")
});

static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^name[ \t]*=[ \t]*"([^"\r\n]*)""#).expect("name line pattern is valid")
});

/// Location of the package version inside a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion {
    /// Byte span of the `[package]` section body
    pub section: Range<usize>,
    /// Current version string, exactly as written
    pub current: String,
}

/// Finds the first `[package]` section and the version declared in it
///
/// # Errors
///
/// Returns `ManifestError::SectionMissing` when there is no `[package]`
/// header, and `ManifestError::VersionFieldMissing` when the section has no
/// `version = "X.Y.Z"` line.
pub fn locate_and_extract_version(text: &str) -> Result<ManifestVersion, ManifestError> {
    let section = package_section(text).ok_or(ManifestError::SectionMissing)?;
    let value = version_value(text, &section).ok_or(ManifestError::VersionFieldMissing)?;

    Ok(ManifestVersion {
        current: text[value].to_string(),
        section,
    })
}

/// Replaces the first version line inside `section` with `new_version`
///
/// Only the quoted version string changes; the key, spacing, trailing
/// comments and line ending are kept as-is.
pub fn rewrite_manifest(
    text: &str,
    section: &Range<usize>,
    new_version: &str,
) -> Result<String, ManifestError> {
    let value = version_value(text, section).ok_or(ManifestError::VersionFieldMissing)?;
    Ok(splice(text, &[value], new_version))
}

/// Reads the `name = "..."` declared in the first `[package]` section
pub fn package_name(text: &str) -> Option<String> {
    let section = package_section(text)?;
    let caps = NAME_LINE.captures_at(text, section.start)?;
    let whole = caps.get(0)?;
    if whole.end() > section.end {
        return None;
    }
    caps.get(1).map(|m| m.as_str().to_string())
}

fn package_section(text: &str) -> Option<Range<usize>> {
    let header = PACKAGE_HEADER.find(text)?;
    let end = SECTION_HEADER
        .find_at(text, header.end())
        .map(|m| m.start())
        .unwrap_or(text.len());
    Some(header.end()..end)
}

/// Byte span of the version digits on the first version line in `section`
fn version_value(text: &str, section: &Range<usize>) -> Option<Range<usize>> {
    let caps = VERSION_LINE.captures_at(text, section.start)?;
    let whole = caps.get(0)?;
    if whole.end() > section.end {
        return None;
    }
    caps.get(1).map(|m| m.range())
}
