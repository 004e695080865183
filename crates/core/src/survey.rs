//! Surveying a directory tree for provider manifests.
//!
//! Packaging layers drop manifests under `capstan-providers/` directories;
//! this walks a tree and reports every manifest found, parsing each with
//! the real parser so malformed trees fail loudly.

use crate::context::FileManifest;
use crate::error::Result;
use crate::manifest::{self, MANIFEST_DIR};
use indexmap::IndexSet;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One provider manifest found while surveying a tree.
#[derive(Debug, Clone, Serialize)]
pub struct CapabilityListing {
    /// Capability the manifest declares providers for
    pub capability: String,
    /// Path of the manifest file
    pub manifest: PathBuf,
    /// Provider names listed, in line order
    pub providers: Vec<String>,
}

/// Walk `root` and report every manifest beneath a `capstan-providers`
/// directory, in walk order.
///
/// Dedup is per manifest here (a survey reports what each file says, not a
/// merged discovery view).
pub fn survey_tree(root: &Path) -> Result<Vec<CapabilityListing>> {
    let mut listings = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let in_manifest_dir = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            == Some(MANIFEST_DIR);
        if !in_manifest_dir {
            continue;
        }
        let Some(capability) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let mut seen = IndexSet::new();
        let providers = manifest::parse_manifest(&FileManifest::new(path), &mut seen)?;
        debug!("surveyed {} ({} providers)", path.display(), providers.len());

        listings.push(CapabilityListing {
            capability: capability.to_string(),
            manifest: path.to_path_buf(),
            providers,
        });
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::write_manifest;
    use crate::error::DiscoveryError;

    #[test]
    fn test_survey_finds_nested_manifests() {
        let temp = tempfile::tempdir().unwrap();
        let module = temp.path().join("module-a");
        std::fs::create_dir_all(&module).unwrap();
        write_manifest(temp.path(), "hex.Schema", "A\nB\n").unwrap();
        write_manifest(&module, "hex.Builder", "C\n").unwrap();

        let mut listings = survey_tree(temp.path()).unwrap();
        listings.sort_by(|a, b| a.capability.cmp(&b.capability));

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].capability, "hex.Builder");
        assert_eq!(listings[0].providers, vec!["C"]);
        assert_eq!(listings[1].capability, "hex.Schema");
        assert_eq!(listings[1].providers, vec!["A", "B"]);
    }

    #[test]
    fn test_survey_ignores_files_outside_manifest_dirs() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("README"), "not a manifest").unwrap();

        assert!(survey_tree(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_survey_surfaces_syntax_errors() {
        let temp = tempfile::tempdir().unwrap();
        write_manifest(temp.path(), "hex.Schema", "Bad Name\n").unwrap();

        assert!(matches!(
            survey_tree(temp.path()),
            Err(DiscoveryError::Syntax { .. })
        ));
    }
}
