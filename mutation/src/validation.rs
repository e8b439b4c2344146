//! Existence validation for ownership writes.
//!
//! Checks run in a fixed order: resources, then owners, then ownership
//! types. Each distinct reference is checked once per request, and the first
//! missing reference ends validation without issuing further calls.

use std::collections::HashSet;
use tenure_core::{Urn, OWNERSHIP_TYPE_ENTITY};
use tenure_store::EntityService;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::input::ResolvedOwner;

/// Switches for checks that do not need the entity service.
#[derive(Debug, Clone, Copy)]
pub struct ValidationOptions {
    /// Reject owners whose URN entity type does not match their declared kind.
    pub enforce_owner_kind: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            enforce_owner_kind: true,
        }
    }
}

/// Confirms that every entity a request references exists.
pub struct ExistenceValidator<'s> {
    service: &'s dyn EntityService,
    options: ValidationOptions,
}

impl<'s> ExistenceValidator<'s> {
    /// Create a new validator.
    pub fn new(service: &'s dyn EntityService, options: ValidationOptions) -> Self {
        Self { service, options }
    }

    /// Validate a single-resource request.
    pub async fn validate(&self, resource: &Urn, owners: &[ResolvedOwner]) -> MutationResult<()> {
        self.validate_all(std::slice::from_ref(resource), owners)
            .await
    }

    /// Validate a request spanning several resources.
    pub async fn validate_all(
        &self,
        resources: &[Urn],
        owners: &[ResolvedOwner],
    ) -> MutationResult<()> {
        for resource in distinct(resources.iter()) {
            if !self.service.exists(resource).await? {
                return Err(MutationError::resource_not_found(resource));
            }
        }

        let mut seen = HashSet::new();
        for owner in owners {
            // Every occurrence is kind-checked; repeats may declare a different kind.
            if self.options.enforce_owner_kind
                && owner.owner.entity_type() != owner.kind.entity_type()
            {
                return Err(MutationError::owner_kind_mismatch(&owner.owner, owner.kind));
            }
            if !seen.insert(&owner.owner) {
                continue;
            }
            if !self.service.exists(&owner.owner).await? {
                return Err(MutationError::owner_not_found(&owner.owner));
            }
        }

        for ownership_type in distinct(owners.iter().map(|o| &o.ownership_type)) {
            if ownership_type.entity_type() != OWNERSHIP_TYPE_ENTITY {
                return Err(MutationError::invalid_ownership_type(ownership_type));
            }
            if !self.service.exists(ownership_type).await? {
                return Err(MutationError::ownership_type_not_found(ownership_type));
            }
        }

        debug!(
            resources = resources.len(),
            owners = seen.len(),
            "all referenced entities exist"
        );
        Ok(())
    }
}

/// Distinct references in first-seen order.
fn distinct<'a>(urns: impl Iterator<Item = &'a Urn>) -> Vec<&'a Urn> {
    let mut seen = HashSet::new();
    urns.filter(|urn| seen.insert(*urn)).collect()
}
