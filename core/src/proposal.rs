//! Change proposals: the unit of write accepted by the entity service.

use serde::{Deserialize, Serialize};

use crate::Urn;

/// How a proposal changes its aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    /// Replace the whole aspect value, creating it if absent.
    Upsert,
}

/// A pending replacement of one aspect of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataChangeProposal {
    pub entity_urn: Urn,
    pub aspect_name: String,
    pub change_type: ChangeType,
    pub aspect: serde_json::Value,
    /// Reject the write unless the stored revision equals this value
    /// (0 meaning "no value stored yet").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_version_match: Option<u64>,
}

impl MetadataChangeProposal {
    pub fn upsert(
        entity_urn: Urn,
        aspect_name: impl Into<String>,
        aspect: serde_json::Value,
    ) -> Self {
        Self {
            entity_urn,
            aspect_name: aspect_name.into(),
            change_type: ChangeType::Upsert,
            aspect,
            if_version_match: None,
        }
    }

    pub fn with_version_match(mut self, revision: u64) -> Self {
        self.if_version_match = Some(revision);
        self
    }
}

/// Proposals committed together: all apply or none do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalBatch {
    pub proposals: Vec<MetadataChangeProposal>,
}

impl ProposalBatch {
    pub fn new(proposals: Vec<MetadataChangeProposal>) -> Self {
        Self { proposals }
    }

    pub fn single(proposal: MetadataChangeProposal) -> Self {
        Self {
            proposals: vec![proposal],
        }
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Entities touched by this batch, in proposal order.
    pub fn entity_urns(&self) -> impl Iterator<Item = &Urn> {
        self.proposals.iter().map(|p| &p.entity_urn)
    }
}
