//! Registry error types.

use thiserror::Error;

/// Errors from ownership-type lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The legacy role name has no mapping.
    #[error("Unknown ownership type: {name}")]
    UnknownOwnershipType { name: String },
}

impl RegistryError {
    pub fn unknown_ownership_type(name: impl Into<String>) -> Self {
        Self::UnknownOwnershipType { name: name.into() }
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
