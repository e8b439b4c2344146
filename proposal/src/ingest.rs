//! Proposal construction and submission.

use tenure_core::{AuditStamp, MetadataChangeProposal, ProposalBatch, OWNERSHIP_ASPECT_NAME};
use tenure_mutation::PreparedOwnership;
use tenure_store::EntityService;
use tracing::{debug, warn};

use crate::error::{IngestError, IngestResult};

/// How proposals are submitted.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Ask the service to acknowledge before the write is durable.
    pub is_async: bool,
    /// Guard each proposal with the revision it was merged against.
    pub conditional_writes: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            is_async: false,
            conditional_writes: true,
        }
    }
}

/// What was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReceipt {
    /// Number of proposals in the batch.
    pub proposals: usize,
    /// Whether the batch was submitted asynchronously.
    pub is_async: bool,
}

/// Builds ownership proposals and submits them to the entity service.
pub struct ProposalIngestor<'s> {
    service: &'s dyn EntityService,
    options: IngestOptions,
}

impl<'s> ProposalIngestor<'s> {
    /// Create a new ingestor.
    pub fn new(service: &'s dyn EntityService, options: IngestOptions) -> Self {
        Self { service, options }
    }

    /// Build the UPSERT proposal for one prepared aspect.
    pub fn build(&self, prepared: &PreparedOwnership) -> IngestResult<MetadataChangeProposal> {
        let payload = prepared.aspect.to_payload()?;
        let proposal = MetadataChangeProposal::upsert(
            prepared.resource.clone(),
            OWNERSHIP_ASPECT_NAME,
            payload,
        );
        Ok(if self.options.conditional_writes {
            proposal.with_version_match(prepared.base_revision)
        } else {
            proposal
        })
    }

    /// Build the batch for a set of prepared aspects.
    pub fn build_batch(&self, prepared: &[PreparedOwnership]) -> IngestResult<ProposalBatch> {
        let proposals = prepared
            .iter()
            .map(|p| self.build(p))
            .collect::<IngestResult<Vec<_>>>()?;
        Ok(ProposalBatch::new(proposals))
    }

    /// Submit every prepared aspect in a single batch.
    pub async fn submit(
        &self,
        prepared: &[PreparedOwnership],
        stamp: &AuditStamp,
    ) -> IngestResult<IngestReceipt> {
        let batch = self.build_batch(prepared)?;
        let receipt = IngestReceipt {
            proposals: batch.len(),
            is_async: self.options.is_async,
        };

        match self
            .service
            .ingest_proposal(batch, stamp, self.options.is_async)
            .await
        {
            Ok(()) => {
                debug!(
                    proposals = receipt.proposals,
                    is_async = receipt.is_async,
                    "submitted ownership proposals"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "ownership proposal batch rejected");
                Err(IngestError::from(e))
            }
        }
    }
}
