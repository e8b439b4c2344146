//! Error types for scenario runs.

use thiserror::Error;

/// Errors raised while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("[{scenario}] step '{step}': {message}")]
    AssertionFailed {
        scenario: String,
        step: String,
        message: String,
    },

    #[error("[{scenario}] invalid fixture: {message}")]
    InvalidFixture { scenario: String, message: String },
}

impl ScenarioError {
    pub fn assertion_failed(
        scenario: impl Into<String>,
        step: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::AssertionFailed {
            scenario: scenario.into(),
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn invalid_fixture(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFixture {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
