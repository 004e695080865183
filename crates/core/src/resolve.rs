//! Resolving discovered names against the host's type registry.

use crate::error::{DiscoveryError, Result};
use capstan_api::{Capability, TypeHandle, TypeRegistry};

/// Resolve a provider name to its type handle and verify that the type
/// declares the requested capability.
///
/// Lookup only: the provider's constructor is never invoked here, so a
/// resolved-but-unused provider has no observable effect.
pub fn resolve(
    registry: &dyn TypeRegistry,
    name: &str,
    capability: &Capability,
) -> Result<TypeHandle> {
    let handle =
        registry
            .try_resolve(name)
            .ok_or_else(|| DiscoveryError::ProviderNotFound {
                capability: capability.qualified_name().to_string(),
                name: name.to_string(),
            })?;

    if !handle.satisfies(capability) {
        return Err(DiscoveryError::ProviderTypeMismatch {
            capability: capability.qualified_name().to_string(),
            name: name.to_string(),
        });
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryTypeRegistry;
    use capstan_api::ProviderDescriptor;

    fn registry() -> InMemoryTypeRegistry {
        let registry = InMemoryTypeRegistry::new();
        registry.register(
            ProviderDescriptor::new("hex.KMeansSchema").with_capability("hex.ModelSchema"),
        );
        registry
    }

    #[test]
    fn test_resolves_registered_provider() {
        let handle = resolve(
            &registry(),
            "hex.KMeansSchema",
            &Capability::from("hex.ModelSchema"),
        )
        .unwrap();
        assert_eq!(handle.name(), "hex.KMeansSchema");
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let err = resolve(
            &registry(),
            "hex.Missing",
            &Capability::from("hex.ModelSchema"),
        )
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::ProviderNotFound { .. }));
    }

    #[test]
    fn test_wrong_capability_is_mismatch() {
        let err = resolve(
            &registry(),
            "hex.KMeansSchema",
            &Capability::from("hex.ModelBuilder"),
        )
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::ProviderTypeMismatch { .. }));
    }
}
