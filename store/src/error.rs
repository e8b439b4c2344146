//! Entity service error types.

use tenure_core::Urn;
use thiserror::Error;

/// Result type for entity service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors reported by an entity service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not complete the call.
    #[error("Entity service unavailable: {message}")]
    Unavailable { message: String },

    /// A conditional write found a different stored revision.
    #[error(
        "Version conflict on {aspect} of {urn}: expected revision {expected}, found {actual}"
    )]
    VersionConflict {
        urn: Urn,
        aspect: String,
        expected: u64,
        actual: u64,
    },

    /// The service refused a malformed proposal.
    #[error("Invalid proposal: {message}")]
    InvalidProposal { message: String },
}

impl ServiceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn version_conflict(
        urn: Urn,
        aspect: impl Into<String>,
        expected: u64,
        actual: u64,
    ) -> Self {
        Self::VersionConflict {
            urn,
            aspect: aspect.into(),
            expected,
            actual,
        }
    }

    pub fn invalid_proposal(message: impl Into<String>) -> Self {
        Self::InvalidProposal {
            message: message.into(),
        }
    }
}
