//! In-memory implementation of TypeRegistry.
//!
//! Provides thread-safe storage for provider name → TypeHandle mappings.

use capstan_api::{ProviderDescriptor, RegistryStats, TypeHandle, TypeRegistry};
use std::collections::HashMap;
use std::sync::RwLock;

/// Thread-safe in-memory type registry
pub struct InMemoryTypeRegistry {
    /// Mapping from provider name to its handle
    providers: RwLock<HashMap<String, TypeHandle>>,
}

impl InMemoryTypeRegistry {
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// Create with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            providers: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Register one provider. A later registration under the same name
    /// replaces the earlier one.
    pub fn register(&self, descriptor: ProviderDescriptor) {
        let handle = TypeHandle::new(descriptor);
        let mut providers = self.providers.write().unwrap();
        providers.insert(handle.name().to_string(), handle);
    }

    /// Register multiple providers at once (more efficient than individual calls)
    pub fn register_batch(&self, descriptors: impl IntoIterator<Item = ProviderDescriptor>) {
        let mut providers = self.providers.write().unwrap();
        for descriptor in descriptors {
            let handle = TypeHandle::new(descriptor);
            providers.insert(handle.name().to_string(), handle);
        }
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        let providers = self.providers.read().unwrap();
        providers.len()
    }

    pub fn stats(&self) -> RegistryStats {
        let providers = self.providers.read().unwrap();

        let mut by_capability: HashMap<String, usize> = HashMap::new();
        for handle in providers.values() {
            for capability in handle.capabilities() {
                *by_capability.entry(capability.clone()).or_default() += 1;
            }
        }

        RegistryStats {
            total_providers: providers.len(),
            by_capability,
        }
    }
}

impl Default for InMemoryTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn try_resolve(&self, name: &str) -> Option<TypeHandle> {
        let providers = self.providers.read().unwrap();
        providers.get(name).cloned()
    }
}
