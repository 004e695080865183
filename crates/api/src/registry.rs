use crate::descriptor::TypeHandle;
use serde::Serialize;
use std::collections::HashMap;

/// Name-keyed type registry the hosting environment implements.
///
/// This is the stand-in for runtime type lookup: the host populates a
/// registry with the provider types it ships (static registration lists,
/// build-time generation, ...), and discovery resolves manifest names
/// against it. Resolution is lookup only; no provider code runs.
pub trait TypeRegistry: Send + Sync {
    /// Resolve a provider name to its handle, if registered.
    fn try_resolve(&self, name: &str) -> Option<TypeHandle>;
}

/// Aggregate numbers about a registry's contents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistryStats {
    /// Number of registered providers
    pub total_providers: usize,
    /// Provider count per declared capability
    pub by_capability: HashMap<String, usize>,
}
