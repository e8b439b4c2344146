//! Tenure Session
//!
//! The ownership mutation pipeline as seen by callers.
//!
//! Responsibilities:
//! - Gate every request on authorization before touching the entity service
//! - Sequence normalize -> validate -> read -> merge -> submit
//! - Run each request as its own task and hand back a future immediately
//! - Report every failure through that future, classified by kind
//!
//! # Module Structure
//!
//! - `mutator` - `OwnershipMutator`, the entry point
//! - `handle` - `MutationHandle`, the future returned to callers
//! - `authz` - The `Authorizer` interface
//! - `clock` - Audit stamp sources
//! - `config` - `PipelineConfig` and environment loading
//! - `error` - `PipelineError` and `ErrorKind`
//! - `result` - `MutationOutcome`
//!
//! # Concurrency
//!
//! The pipeline takes no locks. Two requests against the same resource can
//! both read the same aspect revision; with conditional writes enabled the
//! second submission fails with a retryable version conflict, with them
//! disabled the second write silently replaces the first.

mod authz;
mod clock;
mod config;
mod error;
mod handle;
mod mutator;
mod result;

pub use authz::{Action, Authorizer};
pub use clock::{AuditStampSource, SystemClock};
pub use config::{ConfigError, PipelineConfig};
pub use error::{ErrorKind, PipelineError, PipelineResult};
pub use handle::MutationHandle;
pub use mutator::OwnershipMutator;
pub use result::MutationOutcome;

pub use tenure_mutation::{AddOwnersRequest, BatchAddOwnersRequest, OwnerInput};
