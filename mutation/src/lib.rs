//! Tenure Mutation
//!
//! Prepare ownership writes: normalize owner inputs, validate that every
//! referenced entity exists, and merge the inputs into the current aspect.
//!
//! Responsibilities:
//! - Resolve legacy role names to canonical ownership types
//! - Check existence of the resource, owners and ownership types
//! - Read the latest ownership aspect and merge new owners into it
//! - Produce the complete replacement aspect
//!
//! # Module Structure
//!
//! - `executor` - `OwnershipExecutor` that coordinates the steps
//! - `ops/` - Pure steps (normalize, merge)
//! - `validation` - `ExistenceValidator`
//! - `input` - Request types received from the request layer
//! - `error` - Error types for mutation failures
//! - `result` - The prepared replacement aspect

mod error;
mod executor;
mod input;
mod ops;
mod result;
mod validation;

pub use error::{MutationError, MutationResult};
pub use executor::OwnershipExecutor;
pub use input::{AddOwnersRequest, BatchAddOwnersRequest, OwnerInput, ResolvedOwner};
pub use ops::{merge, merge_counted, normalize_owner, normalize_owners, MergeStats};
pub use result::PreparedOwnership;
pub use validation::{ExistenceValidator, ValidationOptions};
