//! Pipeline error types.

use tenure_core::Urn;
use tenure_mutation::MutationError;
use tenure_proposal::IngestError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Coarse classification of a pipeline failure, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    ResourceNotFound,
    OwnerNotFound,
    OwnershipTypeNotFound,
    UnknownOwnershipType,
    InvalidRequest,
    IngestionFailure,
    VersionConflict,
    ServiceFailure,
    Internal,
}

/// Errors surfaced through a mutation handle.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{actor} is not authorized to change ownership of {resource}")]
    Unauthorized { actor: Urn, resource: Urn },

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Ingestion(#[from] IngestError),

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl PipelineError {
    pub fn unauthorized(actor: &Urn, resource: &Urn) -> Self {
        Self::Unauthorized {
            actor: actor.clone(),
            resource: resource.clone(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Unauthorized { .. } => ErrorKind::Unauthorized,
            PipelineError::Mutation(e) => match e {
                MutationError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
                MutationError::OwnerNotFound { .. } => ErrorKind::OwnerNotFound,
                MutationError::OwnershipTypeNotFound { .. } => ErrorKind::OwnershipTypeNotFound,
                MutationError::UnknownOwnershipType { .. } => ErrorKind::UnknownOwnershipType,
                MutationError::OwnerKindMismatch { .. }
                | MutationError::InvalidOwnershipType { .. }
                | MutationError::NoOwners
                | MutationError::NoResources => ErrorKind::InvalidRequest,
                MutationError::Service(_) => ErrorKind::ServiceFailure,
                MutationError::Aspect(_) => ErrorKind::Internal,
            },
            PipelineError::Ingestion(e) => match e {
                IngestError::VersionConflict { .. } => ErrorKind::VersionConflict,
                IngestError::Failed(_) => ErrorKind::IngestionFailure,
                IngestError::Encode(_) => ErrorKind::Internal,
            },
            PipelineError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Whether the caller may resubmit the same request.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::VersionConflict
    }
}
