//! Ingestion error types.

use tenure_core::{CoreError, Urn};
use tenure_store::ServiceError;
use thiserror::Error;

/// Errors raised while building or submitting proposals.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The aspect could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] CoreError),

    /// The stored aspect changed after it was read.
    #[error("version conflict on {urn}: merged against revision {expected}, store is at {actual}")]
    VersionConflict {
        urn: Urn,
        expected: u64,
        actual: u64,
    },

    /// The entity service refused or failed the batch.
    #[error("ingestion failed: {0}")]
    Failed(ServiceError),
}

impl From<ServiceError> for IngestError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::VersionConflict {
                urn,
                expected,
                actual,
                ..
            } => Self::VersionConflict {
                urn,
                expected,
                actual,
            },
            other => Self::Failed(other),
        }
    }
}

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;
