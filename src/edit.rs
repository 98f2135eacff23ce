//! Targeted text edits on manifest and lockfile documents
//!
//! Neither document is parsed as TOML. Each edit locates one kind of line
//! with an anchored pattern and splices a new version string into the
//! original text, leaving every other byte alone.

pub mod lockfile;
pub mod manifest;

pub use lockfile::{LockfilePatch, patch_lockfile, patch_lockfile_file};
pub use manifest::{ManifestVersion, locate_and_extract_version, package_name, rewrite_manifest};

use std::ops::Range;

/// Replaces each byte range in `edits` with `replacement`
///
/// Ranges must be sorted and non-overlapping.
pub(crate) fn splice(text: &str, edits: &[Range<usize>], replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + edits.len() * replacement.len());
    let mut cursor = 0;
    for range in edits {
        out.push_str(&text[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_multiple_ranges() {
        let text = "a=1.0.0;b=2.0.0;c";
        let out = splice(text, &[2..7, 10..15], "9.9.9");
        assert_eq!(out, "a=9.9.9;b=9.9.9;c");
    }

    #[test]
    fn test_splice_no_edits() {
        assert_eq!(splice("unchanged", &[], "x"), "unchanged");
    }
}
