//! Locating the provider manifests visible for one capability.

use crate::context::SearchContext;
use crate::error::{DiscoveryError, Result};
use crate::manifest::manifest_name;
use capstan_api::{Capability, ManifestHandle, ResourceLocation};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Cursor over the manifests for one capability, in search-context location
/// order.
///
/// Locations are probed one at a time as the cursor advances, so locations
/// past the point where a caller stops pulling are never touched. Within a
/// location the manifest order is whatever the location natively provides.
pub struct ManifestLocator {
    capability: String,
    resource: String,
    pending: VecDeque<Arc<dyn ResourceLocation>>,
}

impl ManifestLocator {
    pub fn new(capability: &Capability, context: &SearchContext) -> Self {
        Self {
            capability: capability.qualified_name().to_string(),
            resource: manifest_name(capability.qualified_name()),
            pending: context.locations().iter().cloned().collect(),
        }
    }

    /// Advance to the next location holding a manifest for the capability.
    ///
    /// Returns `Ok(None)` once every location has been probed. A location
    /// that cannot be examined aborts with `Locate`; zero matches is a
    /// valid outcome, not an error.
    pub fn next_manifest(&mut self) -> Result<Option<Box<dyn ManifestHandle>>> {
        while let Some(location) = self.pending.pop_front() {
            match location.find(&self.resource) {
                Ok(Some(handle)) => {
                    debug!(
                        "found provider manifest {} in {}",
                        handle.uri(),
                        location.describe()
                    );
                    return Ok(Some(handle));
                }
                Ok(None) => continue,
                Err(source) => {
                    return Err(DiscoveryError::Locate {
                        capability: self.capability.clone(),
                        location: location.describe(),
                        source,
                    });
                }
            }
        }
        Ok(None)
    }
}
