pub mod capability;
pub mod descriptor;
pub mod location;
pub mod registry;

// Re-export commonly used types
pub use capability::Capability;
pub use descriptor::{ProviderCtor, ProviderDescriptor, TypeHandle};
pub use location::{ManifestHandle, ResourceLocation};
pub use registry::{RegistryStats, TypeRegistry};
