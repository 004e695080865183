use crate::capability::Capability;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Constructor for a provider instance.
///
/// Discovery never invokes this; whether and when to instantiate a resolved
/// provider is entirely the caller's decision.
pub type ProviderCtor = fn() -> Box<dyn Any + Send + Sync>;

/// Registration-time description of one provider type: its name, the
/// capabilities it declares, and an optional constructor.
pub struct ProviderDescriptor {
    name: String,
    capabilities: Vec<String>,
    construct: Option<ProviderCtor>,
}

impl ProviderDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: Vec::new(),
            construct: None,
        }
    }

    /// Declare a capability this provider satisfies.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Attach the constructor used to build an instance later.
    pub fn with_constructor(mut self, construct: ProviderCtor) -> Self {
        self.construct = Some(construct);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .field("has_constructor", &self.construct.is_some())
            .finish()
    }
}

/// Resolved-but-uninstantiated handle to a provider type.
///
/// Cheap to clone; wraps the shared descriptor the registry was populated
/// with.
#[derive(Clone)]
pub struct TypeHandle {
    descriptor: Arc<ProviderDescriptor>,
}

impl TypeHandle {
    pub fn new(descriptor: ProviderDescriptor) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
        }
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn capabilities(&self) -> &[String] {
        self.descriptor.capabilities()
    }

    /// Whether this provider declares the given capability.
    pub fn satisfies(&self, capability: &Capability) -> bool {
        self.descriptor
            .capabilities
            .iter()
            .any(|c| c == capability.qualified_name())
    }

    /// The constructor registered for this provider, if any. Calling it is
    /// the caller's business; discovery itself never does.
    pub fn constructor(&self) -> Option<ProviderCtor> {
        self.descriptor.construct
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("name", &self.descriptor.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_satisfies_declared_capability() {
        let handle = TypeHandle::new(
            ProviderDescriptor::new("hex.schema.KMeansSchema")
                .with_capability("hex.schema.ModelSchema"),
        );

        assert!(handle.satisfies(&Capability::from("hex.schema.ModelSchema")));
        assert!(!handle.satisfies(&Capability::from("hex.ModelBuilder")));
    }

    #[test]
    fn test_descriptor_without_constructor() {
        let handle = TypeHandle::new(ProviderDescriptor::new("a.B"));
        assert!(handle.constructor().is_none());
        assert!(handle.capabilities().is_empty());
    }
}
