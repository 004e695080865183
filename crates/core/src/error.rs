use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("{capability}: error locating provider manifests in {location}: {source}")]
    Locate {
        capability: String,
        location: String,
        source: std::io::Error,
    },
    #[error("{manifest}: error reading provider manifest: {source}")]
    Read {
        manifest: String,
        source: std::io::Error,
    },
    #[error("{manifest}:{line}: {message}")]
    Syntax {
        manifest: String,
        line: usize,
        message: String,
    },
    #[error("{capability}: provider {name} not found")]
    ProviderNotFound { capability: String, name: String },
    #[error("{capability}: provider {name} does not satisfy the capability")]
    ProviderTypeMismatch { capability: String, name: String },
    #[error("no provider name available")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
