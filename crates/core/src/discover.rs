//! The two-level discovery iterator.
//!
//! Outer level: manifests pulled lazily from the locator. Inner level: the
//! names parsed out of the manifest currently in hand. A manifest is read
//! only when a name from it is actually needed, and then it is parsed to
//! completion in one pass.

use crate::context::SearchContext;
use crate::error::{DiscoveryError, Result};
use crate::locate::ManifestLocator;
use crate::manifest::parse_manifest;
use capstan_api::Capability;
use indexmap::IndexSet;

/// Pull-based iterator over the provider names discovered for one
/// capability.
///
/// State is owned by one discovery operation: the locator cursor, the
/// current manifest's remaining names, a one-name lookahead buffer, and the
/// dedup accumulator shared across every manifest of the operation. Not
/// synchronized; a single instance must not be shared across threads.
pub struct ProviderNames {
    locator: ManifestLocator,
    pending: std::vec::IntoIter<String>,
    next_name: Option<String>,
    seen: IndexSet<String>,
}

impl ProviderNames {
    pub fn new(capability: &Capability, context: &SearchContext) -> Self {
        Self {
            locator: ManifestLocator::new(capability, context),
            pending: Vec::new().into_iter(),
            next_name: None,
            seen: IndexSet::new(),
        }
    }

    /// True if another name is available, buffering it for [`next_name`].
    ///
    /// Advances the outer level only when the inner level is exhausted:
    /// while the current manifest has no names left, the next manifest is
    /// pulled and parsed in full. This is the only point where manifest
    /// I/O happens.
    ///
    /// [`next_name`]: ProviderNames::next_name
    pub fn has_next(&mut self) -> Result<bool> {
        if self.next_name.is_some() {
            return Ok(true);
        }
        loop {
            if let Some(name) = self.pending.next() {
                self.next_name = Some(name);
                return Ok(true);
            }
            match self.locator.next_manifest()? {
                Some(handle) => {
                    self.pending = parse_manifest(handle.as_ref(), &mut self.seen)?.into_iter();
                }
                None => return Ok(false),
            }
        }
    }

    /// Take the buffered name.
    ///
    /// Fails with `Exhausted` when no name is available; iterator state is
    /// left untouched in that case.
    pub fn next_name(&mut self) -> Result<String> {
        if !self.has_next()? {
            return Err(DiscoveryError::Exhausted);
        }
        self.next_name.take().ok_or(DiscoveryError::Exhausted)
    }
}

impl Iterator for ProviderNames {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => self.next_name.take().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::write_manifest;

    fn names_for(capability: &str, context: &SearchContext) -> Vec<String> {
        ProviderNames::new(&Capability::from(capability), context)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_no_manifests_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let context = SearchContext::from_roots(vec![temp.path().to_path_buf()]);
        assert!(names_for("hex.Schema", &context).is_empty());
    }

    #[test]
    fn test_names_deduplicated_across_manifests() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_manifest(first.path(), "hex.Schema", "A\nB\n").unwrap();
        write_manifest(second.path(), "hex.Schema", "B\nC\n").unwrap();

        let context = SearchContext::from_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(names_for("hex.Schema", &context), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_next_name_when_exhausted() {
        let context = SearchContext::new();
        let mut names = ProviderNames::new(&Capability::from("hex.Schema"), &context);

        assert!(!names.has_next().unwrap());
        assert!(matches!(names.next_name(), Err(DiscoveryError::Exhausted)));
        // state is unchanged; asking again gives the same answer
        assert!(matches!(names.next_name(), Err(DiscoveryError::Exhausted)));
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        write_manifest(temp.path(), "hex.Schema", "Only\n").unwrap();
        let context = SearchContext::from_roots(vec![temp.path().to_path_buf()]);

        let mut names = ProviderNames::new(&Capability::from("hex.Schema"), &context);
        assert!(names.has_next().unwrap());
        assert!(names.has_next().unwrap());
        assert_eq!(names.next_name().unwrap(), "Only");
        assert!(!names.has_next().unwrap());
    }

    #[test]
    fn test_later_manifests_not_read_until_needed() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_manifest(first.path(), "hex.Schema", "A\n").unwrap();
        // Broken manifest in the second root; an eager reader would trip on it
        write_manifest(second.path(), "hex.Schema", "Bad Name\n").unwrap();

        let context = SearchContext::from_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        let mut names = ProviderNames::new(&Capability::from("hex.Schema"), &context);

        assert_eq!(names.next_name().unwrap(), "A");
        // Draining past the first manifest now reaches the broken one
        assert!(matches!(names.next_name(), Err(DiscoveryError::Syntax { .. })));
    }
}
