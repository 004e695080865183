//! Search contexts and the stock location implementations.
//!
//! A [`SearchContext`] is the ordered set of locations scanned for provider
//! manifests. Two location kinds ship with capstan: plain directory roots
//! and zip archives (the bundled-distribution case). Anything else can be
//! plugged in through the [`ResourceLocation`] trait.

use capstan_api::{ManifestHandle, ResourceLocation};
use once_cell::sync::Lazy;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zip::ZipArchive;

/// Env var holding the ambient search path (platform path-separator list of
/// location roots).
pub const SEARCH_PATH_VAR: &str = "CAPSTAN_PATH";

static AMBIENT: Lazy<SearchContext> = Lazy::new(|| match std::env::var_os(SEARCH_PATH_VAR) {
    Some(paths) => SearchContext::from_roots(std::env::split_paths(&paths)),
    None => SearchContext::new(),
});

/// Ordered, possibly-empty set of locations scanned for provider manifests.
///
/// Immutable for the duration of one discovery operation; cloning is cheap
/// (locations are shared).
#[derive(Clone, Default)]
pub struct SearchContext {
    locations: Vec<Arc<dyn ResourceLocation>>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
        }
    }

    /// Build a context from filesystem roots, in order. A root ending in
    /// `.zip` becomes an archive location, everything else a directory
    /// location.
    pub fn from_roots(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut context = Self::new();
        for root in roots {
            context.locations.push(location_for_root(root));
        }
        context
    }

    /// The process-wide default context, built once from `CAPSTAN_PATH`.
    pub fn ambient() -> Self {
        AMBIENT.clone()
    }

    /// Add a location at the end of the scan order.
    pub fn with_location(mut self, location: Arc<dyn ResourceLocation>) -> Self {
        self.locations.push(location);
        self
    }

    pub fn push(&mut self, location: Arc<dyn ResourceLocation>) {
        self.locations.push(location);
    }

    pub fn locations(&self) -> &[Arc<dyn ResourceLocation>] {
        &self.locations
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }
}

fn location_for_root(root: PathBuf) -> Arc<dyn ResourceLocation> {
    let is_archive = root
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_archive {
        Arc::new(ArchiveLocation::new(root))
    } else {
        Arc::new(DirLocation::new(root))
    }
}

// ==================== Directory location ====================

/// A directory root; a manifest is a plain file beneath it.
pub struct DirLocation {
    root: PathBuf,
}

impl DirLocation {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLocation for DirLocation {
    fn find(&self, relative: &str) -> io::Result<Option<Box<dyn ManifestHandle>>> {
        let path = self.root.join(relative);
        match path.metadata() {
            Ok(meta) if meta.is_file() => Ok(Some(Box::new(FileManifest::new(path)))),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn location_type(&self) -> &'static str {
        "dir"
    }
}

/// Manifest stored as a plain file.
pub struct FileManifest {
    path: PathBuf,
}

impl FileManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestHandle for FileManifest {
    fn uri(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

// ==================== Archive location ====================

/// A zip archive treated as a location; a manifest is an entry inside it.
///
/// The archive is opened per probe and per read rather than held open, so a
/// context stays cheap to clone and carries no open file handles.
pub struct ArchiveLocation {
    path: PathBuf,
}

impl ArchiveLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResourceLocation for ArchiveLocation {
    fn find(&self, relative: &str) -> io::Result<Option<Box<dyn ManifestHandle>>> {
        let file = File::open(&self.path)?;
        let archive = ZipArchive::new(file).map_err(io::Error::other)?;
        if archive.index_for_name(relative).is_some() {
            Ok(Some(Box::new(ArchiveManifest {
                archive: self.path.clone(),
                entry: relative.to_string(),
            })))
        } else {
            Ok(None)
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn location_type(&self) -> &'static str {
        "archive"
    }
}

struct ArchiveManifest {
    archive: PathBuf,
    entry: String,
}

impl ManifestHandle for ArchiveManifest {
    fn uri(&self) -> String {
        format!("{}!{}", self.archive.display(), self.entry)
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        let file = File::open(&self.archive)?;
        let mut archive = ZipArchive::new(file).map_err(io::Error::other)?;
        let mut entry = archive.by_name(&self.entry).map_err(io::Error::other)?;
        let mut content = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut content)?;
        Ok(Box::new(Cursor::new(content)))
    }
}

/// Write a manifest file under `root`, creating the `capstan-providers`
/// directory as needed. Intended for tests and packaging tooling.
pub fn write_manifest(root: &Path, capability: &str, content: &str) -> io::Result<PathBuf> {
    let dir = root.join(crate::manifest::MANIFEST_DIR);
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(capability);
    std::fs::write(&path, content)?;
    Ok(path)
}
