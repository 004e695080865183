//! Public entry points composing the locator, parser, iterator, and
//! resolver.
//!
//! Either entry point fails fast: the first error raised by any underlying
//! step aborts the whole operation. There is no partial-result mode.

use crate::context::SearchContext;
use crate::discover::ProviderNames;
use crate::error::Result;
use crate::resolve;
use capstan_api::{Capability, TypeHandle, TypeRegistry};
use tracing::debug;

/// Discover every provider registered for `capability`, in discovery order
/// (first-seen-name order across the context's locations, not sorted).
pub fn discover_all(
    capability: &Capability,
    context: &SearchContext,
    registry: &dyn TypeRegistry,
) -> Result<Vec<TypeHandle>> {
    let mut names = ProviderNames::new(capability, context);
    let mut handles = Vec::new();
    while names.has_next()? {
        let name = names.next_name()?;
        handles.push(resolve::resolve(registry, &name, capability)?);
    }
    debug!("discovered {} providers for {}", handles.len(), capability);
    Ok(handles)
}

/// Convenience overload of [`discover_all`] over the process-wide ambient
/// search context.
pub fn discover_all_ambient(
    capability: &Capability,
    registry: &dyn TypeRegistry,
) -> Result<Vec<TypeHandle>> {
    discover_all(capability, &SearchContext::ambient(), registry)
}

/// Lazy variant for callers that consume incrementally: names are pulled
/// and resolved one at a time, so a caller that stops early never reads
/// later manifests.
pub fn discover<'a>(
    capability: &Capability,
    context: &SearchContext,
    registry: &'a dyn TypeRegistry,
) -> DiscoveredProviders<'a> {
    DiscoveredProviders {
        capability: capability.clone(),
        names: ProviderNames::new(capability, context),
        registry,
    }
}

/// Lazy stream of resolved type handles for one capability.
pub struct DiscoveredProviders<'a> {
    capability: Capability,
    names: ProviderNames,
    registry: &'a dyn TypeRegistry,
}

impl Iterator for DiscoveredProviders<'_> {
    type Item = Result<TypeHandle>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = match self.names.next() {
            Some(Ok(name)) => name,
            Some(Err(e)) => return Some(Err(e)),
            None => return None,
        };
        Some(resolve::resolve(self.registry, &name, &self.capability))
    }
}
