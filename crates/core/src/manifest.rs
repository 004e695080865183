//! Provider manifest parsing.
//!
//! A manifest is a UTF-8 text file listing one provider name per line.
//! `#` begins a comment to end-of-line; blank lines are skipped. Any other
//! content must be a single dotted identifier token.

use crate::error::{DiscoveryError, Result};
use capstan_api::ManifestHandle;
use indexmap::IndexSet;
use std::io::{BufRead, BufReader};

/// Directory component under which provider manifests live, relative to a
/// search-context location. The full resource name for a capability is
/// `capstan-providers/<qualified-name>`.
pub const MANIFEST_DIR: &str = "capstan-providers";

/// Derive the relative resource name of a capability's manifest.
pub fn manifest_name(capability: &str) -> String {
    format!("{MANIFEST_DIR}/{capability}")
}

/// Parse one provider manifest to completion.
///
/// `seen` accumulates every name observed so far across the whole discovery
/// operation; names already present are skipped silently, so the returned
/// list holds only this manifest's first-seen contributions, in line order.
///
/// The underlying stream is opened here and released on every exit path.
pub fn parse_manifest(
    handle: &dyn ManifestHandle,
    seen: &mut IndexSet<String>,
) -> Result<Vec<String>> {
    let manifest = handle.uri();
    let stream = handle.open().map_err(|source| DiscoveryError::Read {
        manifest: manifest.clone(),
        source,
    })?;

    let mut names = Vec::new();
    for (idx, line) in BufReader::new(stream).lines().enumerate() {
        let line = line.map_err(|source| DiscoveryError::Read {
            manifest: manifest.clone(),
            source,
        })?;
        if let Some(name) = parse_line(&manifest, idx + 1, &line)? {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }
    Ok(names)
}

/// Parse a single manifest line, returning the provider name it carries (if
/// any). Line numbers are 1-based.
fn parse_line(manifest: &str, line: usize, raw: &str) -> Result<Option<String>> {
    let content = raw.split('#').next().unwrap_or("");
    let token = content.trim();
    if token.is_empty() {
        return Ok(None);
    }

    // A provider name is a single token
    if token.contains(' ') || token.contains('\t') {
        return Err(DiscoveryError::Syntax {
            manifest: manifest.to_string(),
            line,
            message: format!("illegal manifest syntax: {token:?}"),
        });
    }

    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return Ok(None);
    };
    if !is_name_start(first) {
        return Err(illegal_name(manifest, line, token));
    }
    for c in chars {
        if !is_name_continue(c) {
            return Err(illegal_name(manifest, line, token));
        }
    }

    Ok(Some(token.to_string()))
}

fn illegal_name(manifest: &str, line: usize, token: &str) -> DiscoveryError {
    DiscoveryError::Syntax {
        manifest: manifest.to_string(),
        line,
        message: format!("illegal provider name: {token}"),
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    /// In-memory manifest for testing
    struct TextManifest {
        text: &'static str,
    }

    impl TextManifest {
        fn new(text: &'static str) -> Self {
            Self { text }
        }
    }

    impl ManifestHandle for TextManifest {
        fn uri(&self) -> String {
            "mem:manifest".to_string()
        }

        fn open(&self) -> io::Result<Box<dyn Read>> {
            Ok(Box::new(Cursor::new(self.text.as_bytes())))
        }
    }

    fn parse(text: &'static str) -> Result<Vec<String>> {
        let mut seen = IndexSet::new();
        parse_manifest(&TextManifest::new(text), &mut seen)
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let names = parse("Foo\n#comment\n\nBar\n").unwrap();
        assert_eq!(names, vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_trailing_comment_stripped() {
        let names = parse("hex.schema.Foo # the default\n").unwrap();
        assert_eq!(names, vec!["hex.schema.Foo"]);
    }

    #[test]
    fn test_duplicates_within_manifest_dropped() {
        let names = parse("Foo\nFoo\n").unwrap();
        assert_eq!(names, vec!["Foo"]);
    }

    #[test]
    fn test_internal_space_rejected() {
        let err = parse("Foo Bar\n").unwrap_err();
        match err {
            DiscoveryError::Syntax { line, .. } => assert_eq!(line, 1),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_illegal_name_start_rejected() {
        assert!(matches!(
            parse("1Foo\n"),
            Err(DiscoveryError::Syntax { .. })
        ));
    }

    #[test]
    fn test_illegal_name_character_rejected() {
        assert!(matches!(
            parse("Foo/Bar\n"),
            Err(DiscoveryError::Syntax { .. })
        ));
    }

    #[test]
    fn test_line_numbers_count_all_lines() {
        let err = parse("Foo\n# fine\n\nBad Name\n").unwrap_err();
        match err {
            DiscoveryError::Syntax { line, .. } => assert_eq!(line, 4),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_accumulator_shared_across_manifests() {
        let mut seen = IndexSet::new();
        let first = parse_manifest(&TextManifest::new("A\nB\n"), &mut seen).unwrap();
        let second = parse_manifest(&TextManifest::new("B\nC\n"), &mut seen).unwrap();

        assert_eq!(first, vec!["A", "B"]);
        assert_eq!(second, vec!["C"]);
    }

    #[test]
    fn test_underscore_and_dotted_names_accepted() {
        let names = parse("_internal.schema_v3.Grep\n").unwrap();
        assert_eq!(names, vec!["_internal.schema_v3.Grep"]);
    }
}
