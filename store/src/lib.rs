//! Tenure Store
//!
//! The entity service boundary: existence checks, versioned aspect reads and
//! batched proposal ingestion.
//!
//! Responsibilities:
//! - Define the `EntityService` interface the pipeline depends on
//! - Provide an in-memory implementation with per-aspect history
//! - Apply proposal batches atomically
//! - Reject stale conditional writes
//!
//! # Module Structure
//!
//! - `service` - The `EntityService` trait
//! - `memory` - `InMemoryEntityService`
//! - `error` - Error types for service failures

mod error;
mod memory;
mod service;

pub use error::{ServiceError, ServiceResult};
pub use memory::InMemoryEntityService;
pub use service::EntityService;
