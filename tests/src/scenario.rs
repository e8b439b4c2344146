//! Scenario definitions and the harness that runs them.

use std::sync::Arc;
use tenure_core::{AuditStamp, Urn, OWNERSHIP_ASPECT_NAME};
use tenure_mutation::{AddOwnersRequest, BatchAddOwnersRequest};
use tenure_session::{MutationHandle, OwnershipMutator, PipelineConfig};
use tokio::runtime::Handle;

use crate::assertion::{Expect, StepReport};
use crate::error::{ScenarioError, ScenarioResult};
use crate::fixtures::{init_tracing, urn, FixedClock, RecordingEntityService, StaticPolicy};

/// A pipeline wired to recording test doubles.
pub struct Harness {
    pub service: Arc<RecordingEntityService>,
    pub mutator: OwnershipMutator,
}

impl Harness {
    /// Build a harness on the current tokio runtime.
    pub fn new(entities: &[&str], policy: StaticPolicy, config: PipelineConfig) -> Self {
        init_tracing();
        let service = Arc::new(RecordingEntityService::new(
            entities.iter().map(|s| urn(s)),
        ));
        let mutator = OwnershipMutator::new(service.clone(), Arc::new(policy), Handle::current())
            .with_clock(Arc::new(FixedClock))
            .with_config(config);
        Self { service, mutator }
    }

    /// A harness where everyone is authorized and defaults apply.
    pub fn permissive(entities: &[&str]) -> Self {
        Self::new(entities, StaticPolicy::allow_all(), PipelineConfig::default())
    }

    /// Store an ownership aspect directly, as if written earlier.
    pub async fn seed_aspect(&self, resource: &str, payload: serde_json::Value) -> u64 {
        let seeder = AuditStamp::new(urn("urn:li:corpuser:seeder"), 0);
        self.service
            .store()
            .put_aspect(urn(resource), OWNERSHIP_ASPECT_NAME, payload, seeder)
            .await
    }

    pub fn add(&self, request: AddOwnersRequest, actor: &str) -> MutationHandle {
        self.mutator.add_owners(request, urn(actor))
    }

    pub fn batch(&self, request: BatchAddOwnersRequest, actor: &str) -> MutationHandle {
        self.mutator.batch_add_owners(request, urn(actor))
    }

    /// Start a mutation with `start`, await it and collect the calls it made.
    pub async fn report<F>(&self, start: F) -> StepReport
    where
        F: FnOnce(&Self) -> MutationHandle,
    {
        let before = self.service.call_count();
        let result = start(self).await;
        let calls = self.service.calls().split_off(before);
        StepReport { result, calls }
    }
}

enum Request {
    Add(AddOwnersRequest),
    Batch(BatchAddOwnersRequest),
}

struct Step {
    name: String,
    actor: String,
    request: Request,
    expect: Expect,
}

/// A sequence of requests run one after another against one store.
pub struct Scenario {
    name: String,
    entities: Vec<String>,
    aspects: Vec<(String, serde_json::Value)>,
    policy: StaticPolicy,
    config: PipelineConfig,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
            aspects: Vec::new(),
            policy: StaticPolicy::allow_all(),
            config: PipelineConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Entities that exist before the first step.
    pub fn entities(mut self, urns: &[&str]) -> Self {
        self.entities.extend(urns.iter().map(|s| s.to_string()));
        self
    }

    /// An ownership aspect stored before the first step.
    pub fn aspect(mut self, resource: &str, payload: serde_json::Value) -> Self {
        self.aspects.push((resource.to_string(), payload));
        self
    }

    pub fn policy(mut self, policy: StaticPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a single-resource step.
    pub fn add_owners<F>(
        mut self,
        name: &str,
        actor: &str,
        request: AddOwnersRequest,
        f: F,
    ) -> Self
    where
        F: FnOnce(Expect) -> Expect,
    {
        self.steps.push(Step {
            name: name.to_string(),
            actor: actor.to_string(),
            request: Request::Add(request),
            expect: f(Expect::new()),
        });
        self
    }

    /// Add a multi-resource step.
    pub fn batch_add_owners<F>(
        mut self,
        name: &str,
        actor: &str,
        request: BatchAddOwnersRequest,
        f: F,
    ) -> Self
    where
        F: FnOnce(Expect) -> Expect,
    {
        self.steps.push(Step {
            name: name.to_string(),
            actor: actor.to_string(),
            request: Request::Batch(request),
            expect: f(Expect::new()),
        });
        self
    }

    /// Run every step in order and verify its expectation.
    pub async fn run(self) -> ScenarioResult<Harness> {
        if self.steps.is_empty() {
            return Err(ScenarioError::invalid_fixture(&self.name, "scenario has no steps"));
        }

        let entities: Vec<&str> = self.entities.iter().map(String::as_str).collect();
        let harness = Harness::new(&entities, self.policy, self.config);
        for (resource, payload) in self.aspects {
            harness.seed_aspect(&resource, payload).await;
        }

        for step in self.steps {
            let actor = step.actor;
            let report = match step.request {
                Request::Add(request) => harness.report(|h| h.add(request, &actor)).await,
                Request::Batch(request) => harness.report(|h| h.batch(request, &actor)).await,
            };
            step.expect
                .verify(&self.name, &step.name, &report, &harness.service)
                .await?;
        }
        Ok(harness)
    }
}
