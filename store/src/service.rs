//! The entity service interface.

use async_trait::async_trait;
use tenure_core::{AspectVersion, AuditStamp, ProposalBatch, Urn, VersionedAspect};

use crate::error::ServiceResult;

/// Read, write and existence operations on versioned aspects.
///
/// Every call may block on I/O; callers must issue them from worker tasks.
#[async_trait]
pub trait EntityService: Send + Sync {
    /// Whether an entity with this URN exists.
    async fn exists(&self, urn: &Urn) -> ServiceResult<bool>;

    /// Read one version of an aspect. `AspectVersion::LATEST` reads the
    /// current value. Absence is `Ok(None)`, not an error.
    async fn get_aspect(
        &self,
        urn: &Urn,
        aspect_name: &str,
        version: AspectVersion,
    ) -> ServiceResult<Option<VersionedAspect<serde_json::Value>>>;

    /// Commit a batch of proposals. Either every proposal applies or none does.
    ///
    /// `is_async` asks the service to acknowledge before the write is
    /// durable; the call still fails if the batch is rejected up front.
    async fn ingest_proposal(
        &self,
        batch: ProposalBatch,
        audit: &AuditStamp,
        is_async: bool,
    ) -> ServiceResult<()>;
}
