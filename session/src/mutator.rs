//! Ownership mutator - the orchestrating entry point.
//!
//! Each call spawns one task on the configured runtime and returns a
//! [`MutationHandle`] immediately. The task runs the steps in order and
//! stops at the first failure:
//!
//! 1. authorization
//! 2. normalization of owner inputs
//! 3. existence validation
//! 4. read of the current aspect and merge
//! 5. proposal submission

use std::collections::HashSet;
use std::sync::Arc;
use tenure_core::{AuditStamp, Urn};
use tenure_mutation::{AddOwnersRequest, BatchAddOwnersRequest, OwnershipExecutor};
use tenure_proposal::ProposalIngestor;
use tenure_store::EntityService;
use tokio::runtime::Handle;
use tracing::{debug, info_span, warn, Instrument};

use crate::authz::{Action, Authorizer};
use crate::clock::{AuditStampSource, SystemClock};
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::handle::MutationHandle;

/// Adds owners to resources on behalf of an actor.
#[derive(Clone)]
pub struct OwnershipMutator {
    service: Arc<dyn EntityService>,
    authorizer: Arc<dyn Authorizer>,
    clock: Arc<dyn AuditStampSource>,
    config: PipelineConfig,
    runtime: Handle,
}

impl OwnershipMutator {
    /// Create a mutator that runs its work on `runtime`.
    pub fn new(
        service: Arc<dyn EntityService>,
        authorizer: Arc<dyn Authorizer>,
        runtime: Handle,
    ) -> Self {
        Self {
            service,
            authorizer,
            clock: Arc::new(SystemClock),
            config: PipelineConfig::default(),
            runtime,
        }
    }

    /// Use a different audit stamp source.
    pub fn with_clock(mut self, clock: Arc<dyn AuditStampSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Use a different configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add owners to a single resource.
    pub fn add_owners(&self, request: AddOwnersRequest, actor: Urn) -> MutationHandle {
        let span = info_span!(
            "add_owners",
            resource = %request.resource,
            actor = %actor,
            owners = request.owners.len()
        );
        let this = self.clone();
        let task = async move {
            let result = this.run_add(request, &actor).await;
            if let Err(e) = &result {
                warn!(error = %e, kind = ?e.kind(), "ownership mutation failed");
            }
            result
        };
        MutationHandle::new(self.runtime.spawn(task.instrument(span)))
    }

    /// Add the same owners to several resources, submitted as one batch.
    pub fn batch_add_owners(&self, request: BatchAddOwnersRequest, actor: Urn) -> MutationHandle {
        let span = info_span!(
            "batch_add_owners",
            resources = request.resources.len(),
            actor = %actor,
            owners = request.owners.len()
        );
        let this = self.clone();
        let task = async move {
            let result = this.run_batch(request, &actor).await;
            if let Err(e) = &result {
                warn!(error = %e, kind = ?e.kind(), "batch ownership mutation failed");
            }
            result
        };
        MutationHandle::new(self.runtime.spawn(task.instrument(span)))
    }

    async fn run_add(&self, request: AddOwnersRequest, actor: &Urn) -> PipelineResult<bool> {
        self.authorize(actor, &request.resource)?;

        let executor = self.executor();
        let owners = executor.normalize(&request.owners)?;
        executor
            .validate(std::slice::from_ref(&request.resource), &owners)
            .await?;

        let stamp = self.stamp(actor);
        let prepared = executor.prepare(&request.resource, &owners, &stamp).await?;

        self.ingestor().submit(&[prepared], &stamp).await?;
        Ok(true)
    }

    async fn run_batch(&self, request: BatchAddOwnersRequest, actor: &Urn) -> PipelineResult<bool> {
        for resource in &request.resources {
            self.authorize(actor, resource)?;
        }

        let mut seen = HashSet::new();
        let resources: Vec<Urn> = request
            .resources
            .into_iter()
            .filter(|r| seen.insert(r.clone()))
            .collect();

        let executor = self.executor();
        let owners = executor.normalize(&request.owners)?;
        executor.validate(&resources, &owners).await?;

        let stamp = self.stamp(actor);
        let mut prepared = Vec::with_capacity(resources.len());
        for resource in &resources {
            prepared.push(executor.prepare(resource, &owners, &stamp).await?);
        }

        self.ingestor().submit(&prepared, &stamp).await?;
        Ok(true)
    }

    fn authorize(&self, actor: &Urn, resource: &Urn) -> PipelineResult<()> {
        if self
            .authorizer
            .is_authorized(actor, Action::MutateOwnership, resource)
        {
            Ok(())
        } else {
            debug!(actor = %actor, resource = %resource, "authorization denied");
            Err(PipelineError::unauthorized(actor, resource))
        }
    }

    fn stamp(&self, actor: &Urn) -> AuditStamp {
        self.clock.stamp(actor)
    }

    fn executor(&self) -> OwnershipExecutor<'_> {
        OwnershipExecutor::new(self.service.as_ref(), self.config.validation_options())
    }

    fn ingestor(&self) -> ProposalIngestor<'_> {
        ProposalIngestor::new(self.service.as_ref(), self.config.ingest_options())
    }
}
