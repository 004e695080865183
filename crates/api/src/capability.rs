use serde::{Deserialize, Serialize};
use std::fmt;

/// A named contract that providers implement, identified by its
/// fully-qualified name (e.g. `hex.schema.ModelSchema`).
///
/// A capability is supplied by the caller for the lifetime of one discovery
/// operation and never changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The fully-qualified contract name.
    pub fn qualified_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Capability {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Capability {
    fn from(name: String) -> Self {
        Self(name)
    }
}
