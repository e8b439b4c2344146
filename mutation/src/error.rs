//! Mutation error types.

use tenure_core::{CoreError, OwnerEntityKind, Urn};
use tenure_registry::RegistryError;
use tenure_store::ServiceError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while preparing an ownership write.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Resource not found: {urn}")]
    ResourceNotFound { urn: Urn },

    #[error("Owner not found: {urn}")]
    OwnerNotFound { urn: Urn },

    #[error("Ownership type not found: {urn}")]
    OwnershipTypeNotFound { urn: Urn },

    #[error("Unknown ownership type: {name}")]
    UnknownOwnershipType { name: String },

    #[error("Owner {owner} is not a {expected:?}: entity type is {actual}")]
    OwnerKindMismatch {
        owner: Urn,
        expected: OwnerEntityKind,
        actual: String,
    },

    #[error("Not an ownership type reference: {urn}")]
    InvalidOwnershipType { urn: Urn },

    #[error("Request names no owners")]
    NoOwners,

    #[error("Request names no resources")]
    NoResources,

    #[error("Entity service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Aspect error: {0}")]
    Aspect(#[from] CoreError),
}

impl MutationError {
    pub fn resource_not_found(urn: &Urn) -> Self {
        Self::ResourceNotFound { urn: urn.clone() }
    }

    pub fn owner_not_found(urn: &Urn) -> Self {
        Self::OwnerNotFound { urn: urn.clone() }
    }

    pub fn ownership_type_not_found(urn: &Urn) -> Self {
        Self::OwnershipTypeNotFound { urn: urn.clone() }
    }

    pub fn owner_kind_mismatch(owner: &Urn, expected: OwnerEntityKind) -> Self {
        Self::OwnerKindMismatch {
            owner: owner.clone(),
            expected,
            actual: owner.entity_type().to_string(),
        }
    }

    pub fn invalid_ownership_type(urn: &Urn) -> Self {
        Self::InvalidOwnershipType { urn: urn.clone() }
    }
}

impl From<RegistryError> for MutationError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::UnknownOwnershipType { name } => Self::UnknownOwnershipType { name },
        }
    }
}
