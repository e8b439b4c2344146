//! Ownership executor - coordinates the preparation steps.
//!
//! The executor delegates to:
//! - `ops/normalize.rs` - ownership-type resolution
//! - `validation.rs` - existence checks
//! - `ops/merge.rs` - the owner list merge
//!
//! It reads from the entity service but never writes; the prepared aspect is
//! handed back to the caller for submission.

use tenure_core::{
    AspectVersion, AuditStamp, OwnershipAspect, OwnershipSource, Urn, VersionedAspect,
    OWNERSHIP_ASPECT_NAME,
};
use tenure_store::EntityService;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::input::{OwnerInput, ResolvedOwner};
use crate::ops;
use crate::result::PreparedOwnership;
use crate::validation::{ExistenceValidator, ValidationOptions};

/// Ownership mutation executor.
pub struct OwnershipExecutor<'s> {
    service: &'s dyn EntityService,
    validator: ExistenceValidator<'s>,
    source: OwnershipSource,
}

impl<'s> OwnershipExecutor<'s> {
    /// Create a new executor.
    pub fn new(service: &'s dyn EntityService, options: ValidationOptions) -> Self {
        Self {
            service,
            validator: ExistenceValidator::new(service, options),
            source: OwnershipSource::manual(),
        }
    }

    /// Use a different source for the owner records this executor writes.
    pub fn with_source(mut self, source: OwnershipSource) -> Self {
        self.source = source;
        self
    }

    /// Resolve owner inputs to canonical ownership types.
    pub fn normalize(&self, inputs: &[OwnerInput]) -> MutationResult<Vec<ResolvedOwner>> {
        if inputs.is_empty() {
            return Err(MutationError::NoOwners);
        }
        ops::normalize_owners(inputs)
    }

    /// Check that the resources, owners and ownership types exist.
    pub async fn validate(
        &self,
        resources: &[Urn],
        owners: &[ResolvedOwner],
    ) -> MutationResult<()> {
        if resources.is_empty() {
            return Err(MutationError::NoResources);
        }
        self.validator.validate_all(resources, owners).await
    }

    /// Read the latest ownership aspect of a resource.
    pub async fn read_current(
        &self,
        resource: &Urn,
    ) -> MutationResult<Option<VersionedAspect<OwnershipAspect>>> {
        let stored = self
            .service
            .get_aspect(resource, OWNERSHIP_ASPECT_NAME, AspectVersion::LATEST)
            .await?;
        let current = stored
            .map(|versioned| versioned.try_map(|payload| OwnershipAspect::from_payload(&payload)))
            .transpose()?;
        Ok(current)
    }

    /// Read the current aspect of `resource` and merge `owners` into it.
    pub async fn prepare(
        &self,
        resource: &Urn,
        owners: &[ResolvedOwner],
        stamp: &AuditStamp,
    ) -> MutationResult<PreparedOwnership> {
        let current = self.read_current(resource).await?;
        let base_revision = current.as_ref().map(|c| c.revision).unwrap_or(0);

        let (aspect, stats) = ops::merge_counted(
            current.as_ref().map(|c| &c.value),
            owners,
            stamp,
            &self.source,
        );

        debug!(
            resource = %resource,
            base_revision,
            added = stats.added,
            replaced = stats.replaced,
            upgraded = stats.upgraded,
            collapsed = stats.collapsed,
            "merged ownership"
        );

        Ok(PreparedOwnership {
            resource: resource.clone(),
            base_revision,
            aspect,
            stats,
        })
    }
}
