//! Tenure Tests
//!
//! Integration test framework for the ownership pipeline.
//!
//! Responsibilities:
//! - Recording test doubles for the entity service, authorizer and clock
//! - A `Scenario` builder that runs requests step by step
//! - Expectations over results, service calls and stored aspects
//!
//! # Module Structure
//!
//! - `fixtures` - Test doubles and URN constants
//! - `scenario` - `Scenario` and `Harness`
//! - `assertion` - `Expect` and `StepReport`
//! - `error` - Error types for scenario runs

pub mod error;
pub mod scenario;

pub mod prelude {
    pub use crate::assertion::{stored, Expect, StepReport};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::fixtures::*;
    pub use crate::scenario::{Harness, Scenario};
    pub use serde_json::json;
    pub use tenure_core::{OwnerEntityKind, Urn};
    pub use tenure_mutation::{AddOwnersRequest, BatchAddOwnersRequest, OwnerInput};
    pub use tenure_session::{ErrorKind, PipelineConfig};
    pub use tenure_store::ServiceError;
}
