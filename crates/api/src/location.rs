//! Seams between the discovery engine and the mechanism that stores
//! provider manifests.
//!
//! A search context is an ordered list of [`ResourceLocation`]s. Each
//! location knows how to probe for a manifest by its derived relative name;
//! the engine never assumes anything about the storage behind it.

use std::io::{self, Read};

/// One resolvable location in a search context (a directory root, an
/// archive, ...).
pub trait ResourceLocation: Send + Sync {
    /// Probe this location for the named resource.
    ///
    /// `Ok(None)` means the location is healthy but holds no such manifest;
    /// an `Err` means the location itself could not be examined.
    fn find(&self, relative: &str) -> io::Result<Option<Box<dyn ManifestHandle>>>;

    /// Human-readable identity, used in logs and error messages.
    fn describe(&self) -> String;

    /// Location kind as a string (for statistics and filtering).
    fn location_type(&self) -> &'static str;
}

/// Handle to one provider manifest.
///
/// Finding a manifest and reading it are separate steps: `open` is deferred
/// until the manifest is actually parsed, and the returned stream is read
/// exactly once, to completion.
pub trait ManifestHandle: Send {
    /// Stable identity of the manifest (a path, or `archive!entry`), used in
    /// diagnostics.
    fn uri(&self) -> String;

    /// Open the manifest content for a single full read.
    fn open(&self) -> io::Result<Box<dyn Read>>;
}
