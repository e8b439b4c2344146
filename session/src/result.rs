//! Caller-facing mutation outcome.

use crate::error::{ErrorKind, PipelineResult};

/// Success flag plus failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub error: Option<ErrorKind>,
}

impl MutationOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(kind: ErrorKind) -> Self {
        Self {
            success: false,
            error: Some(kind),
        }
    }
}

impl From<PipelineResult<bool>> for MutationOutcome {
    fn from(result: PipelineResult<bool>) -> Self {
        match result {
            Ok(success) => {
                debug_assert!(success, "completed mutations resolve to true");
                Self::succeeded()
            }
            Err(e) => Self::failed(e.kind()),
        }
    }
}
