//! In-memory entity service.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tenure_core::{
    AspectVersion, AuditStamp, ChangeType, MetadataChangeProposal, ProposalBatch, Urn,
    VersionedAspect,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::service::EntityService;

/// One committed write of an aspect.
#[derive(Debug, Clone)]
struct StoredVersion {
    payload: serde_json::Value,
    audit: AuditStamp,
}

#[derive(Debug, Default)]
struct StoreState {
    /// Entities known to exist independently of any aspect.
    entities: HashSet<Urn>,
    /// Aspect history keyed by (entity, aspect name), oldest first.
    aspects: HashMap<(Urn, String), Vec<StoredVersion>>,
}

impl StoreState {
    fn revision(&self, urn: &Urn, aspect: &str) -> u64 {
        self.aspects
            .get(&(urn.clone(), aspect.to_string()))
            .map(|history| history.len() as u64)
            .unwrap_or(0)
    }

    fn exists(&self, urn: &Urn) -> bool {
        self.entities.contains(urn) || self.aspects.keys().any(|(entity, _)| entity == urn)
    }
}

/// An entity service holding everything in process memory.
///
/// Each aspect keeps its full write history. The revision of an aspect is
/// the number of writes it has received, so a never-written aspect is at
/// revision 0.
#[derive(Debug, Default)]
pub struct InMemoryEntityService {
    state: RwLock<StoreState>,
}

impl InMemoryEntityService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service where the given entities exist.
    pub fn with_entities(urns: impl IntoIterator<Item = Urn>) -> Self {
        let state = StoreState {
            entities: urns.into_iter().collect(),
            aspects: HashMap::new(),
        };
        Self {
            state: RwLock::new(state),
        }
    }

    /// Mark an entity as existing.
    pub async fn register(&self, urn: Urn) {
        self.state.write().await.entities.insert(urn);
    }

    /// Store an aspect value directly, bypassing proposals. Returns the new revision.
    pub async fn put_aspect(
        &self,
        urn: Urn,
        aspect_name: impl Into<String>,
        payload: serde_json::Value,
        audit: AuditStamp,
    ) -> u64 {
        let mut state = self.state.write().await;
        let history = state.aspects.entry((urn, aspect_name.into())).or_default();
        history.push(StoredVersion { payload, audit });
        history.len() as u64
    }

    /// Current revision of an aspect (0 if never written).
    pub async fn revision(&self, urn: &Urn, aspect_name: &str) -> u64 {
        self.state.read().await.revision(urn, aspect_name)
    }

    /// Audit stamp of the latest write of an aspect.
    pub async fn last_audit(&self, urn: &Urn, aspect_name: &str) -> Option<AuditStamp> {
        self.state
            .read()
            .await
            .aspects
            .get(&(urn.clone(), aspect_name.to_string()))
            .and_then(|history| history.last())
            .map(|version| version.audit.clone())
    }

    fn check_proposal(proposal: &MetadataChangeProposal) -> ServiceResult<()> {
        if proposal.aspect_name.is_empty() {
            return Err(ServiceError::invalid_proposal(format!(
                "proposal for {} has no aspect name",
                proposal.entity_urn
            )));
        }
        match proposal.change_type {
            ChangeType::Upsert => Ok(()),
        }
    }
}

#[async_trait]
impl EntityService for InMemoryEntityService {
    async fn exists(&self, urn: &Urn) -> ServiceResult<bool> {
        Ok(self.state.read().await.exists(urn))
    }

    async fn get_aspect(
        &self,
        urn: &Urn,
        aspect_name: &str,
        version: AspectVersion,
    ) -> ServiceResult<Option<VersionedAspect<serde_json::Value>>> {
        let state = self.state.read().await;
        let Some(history) = state.aspects.get(&(urn.clone(), aspect_name.to_string())) else {
            return Ok(None);
        };

        let found = if version.is_latest() {
            history
                .last()
                .map(|v| VersionedAspect::new(history.len() as u64, v.payload.clone()))
        } else {
            let index = (version.raw() - 1) as usize;
            history
                .get(index)
                .map(|v| VersionedAspect::new(version.raw(), v.payload.clone()))
        };
        Ok(found)
    }

    async fn ingest_proposal(
        &self,
        batch: ProposalBatch,
        audit: &AuditStamp,
        is_async: bool,
    ) -> ServiceResult<()> {
        let mut state = self.state.write().await;

        // Validate the whole batch against a staged view of revisions so that
        // nothing is applied unless everything can be.
        let mut staged: HashMap<(Urn, String), u64> = HashMap::new();
        for proposal in &batch.proposals {
            Self::check_proposal(proposal)?;
            let key = (proposal.entity_urn.clone(), proposal.aspect_name.clone());
            let current = *staged
                .entry(key.clone())
                .or_insert_with(|| state.revision(&key.0, &key.1));
            if let Some(expected) = proposal.if_version_match {
                if expected != current {
                    return Err(ServiceError::version_conflict(
                        proposal.entity_urn.clone(),
                        &proposal.aspect_name,
                        expected,
                        current,
                    ));
                }
            }
            staged.insert(key, current + 1);
        }

        let count = batch.len();
        for proposal in batch.proposals {
            let key = (proposal.entity_urn, proposal.aspect_name);
            state.aspects.entry(key).or_default().push(StoredVersion {
                payload: proposal.aspect,
                audit: audit.clone(),
            });
        }

        debug!(proposals = count, actor = %audit.actor, is_async, "ingested proposal batch");
        Ok(())
    }
}
