//! The ownership aspect and its owner records.
//!
//! The aspect is stored as JSON. Field names follow the platform's wire
//! names (`owner`, `type`, `typeUrn`, `source`) so that aspects written by
//! older producers, which carry only the legacy `type`, still decode.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::urn::{CORP_GROUP_ENTITY, CORP_USER_ENTITY};
use crate::{AuditStamp, Urn};

/// Aspect name under which ownership is stored.
pub const OWNERSHIP_ASPECT_NAME: &str = "ownership";

/// What kind of principal an owner is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerEntityKind {
    User,
    Group,
}

impl OwnerEntityKind {
    /// The URN entity type an owner of this kind must have.
    pub fn entity_type(self) -> &'static str {
        match self {
            OwnerEntityKind::User => CORP_USER_ENTITY,
            OwnerEntityKind::Group => CORP_GROUP_ENTITY,
        }
    }

    /// Infer the kind from an owner URN, if it names a user or group.
    pub fn of(urn: &Urn) -> Option<Self> {
        match urn.entity_type() {
            CORP_USER_ENTITY => Some(OwnerEntityKind::User),
            CORP_GROUP_ENTITY => Some(OwnerEntityKind::Group),
            _ => None,
        }
    }
}

/// Deprecated enumerated ownership roles.
///
/// These predate ownership-type entities. New writes carry a canonical
/// ownership-type URN; the legacy value is kept alongside when one maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyOwnershipType {
    TechnicalOwner,
    BusinessOwner,
    DataSteward,
    None,
    Dataowner,
    Producer,
    Developer,
    Delegate,
    Consumer,
    Stakeholder,
}

impl LegacyOwnershipType {
    /// Every legacy value, in declaration order.
    pub const ALL: [LegacyOwnershipType; 10] = [
        LegacyOwnershipType::TechnicalOwner,
        LegacyOwnershipType::BusinessOwner,
        LegacyOwnershipType::DataSteward,
        LegacyOwnershipType::None,
        LegacyOwnershipType::Dataowner,
        LegacyOwnershipType::Producer,
        LegacyOwnershipType::Developer,
        LegacyOwnershipType::Delegate,
        LegacyOwnershipType::Consumer,
        LegacyOwnershipType::Stakeholder,
    ];

    /// The stable upper-snake name, e.g. `TECHNICAL_OWNER`.
    pub fn name(self) -> &'static str {
        match self {
            LegacyOwnershipType::TechnicalOwner => "TECHNICAL_OWNER",
            LegacyOwnershipType::BusinessOwner => "BUSINESS_OWNER",
            LegacyOwnershipType::DataSteward => "DATA_STEWARD",
            LegacyOwnershipType::None => "NONE",
            LegacyOwnershipType::Dataowner => "DATAOWNER",
            LegacyOwnershipType::Producer => "PRODUCER",
            LegacyOwnershipType::Developer => "DEVELOPER",
            LegacyOwnershipType::Delegate => "DELEGATE",
            LegacyOwnershipType::Consumer => "CONSUMER",
            LegacyOwnershipType::Stakeholder => "STAKEHOLDER",
        }
    }
}

/// Where an ownership assertion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipSourceKind {
    Audit,
    Database,
    FileSystem,
    IssueTrackingSystem,
    Manual,
    Service,
    SourceControl,
    Other,
}

/// Provenance of an owner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipSource {
    #[serde(rename = "type")]
    pub kind: OwnershipSourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl OwnershipSource {
    pub fn new(kind: OwnershipSourceKind) -> Self {
        Self { kind, url: None }
    }

    /// Source stamped on owners added through the mutation API.
    pub fn manual() -> Self {
        Self::new(OwnershipSourceKind::Manual)
    }
}

/// One owner of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerEntry {
    /// The owning principal. Unique within an aspect.
    pub owner: Urn,
    /// User or group. Older records omit it; it is then inferred from the URN.
    #[serde(rename = "ownerKind", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<OwnerEntityKind>,
    /// Canonical ownership-type reference. Absent on legacy-only records.
    #[serde(rename = "typeUrn", default, skip_serializing_if = "Option::is_none")]
    pub ownership_type: Option<Urn>,
    /// Deprecated role value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub legacy_type: Option<LegacyOwnershipType>,
    pub source: OwnershipSource,
}

impl OwnerEntry {
    /// The owner's kind, falling back to the URN's entity type.
    pub fn owner_kind(&self) -> Option<OwnerEntityKind> {
        self.kind.or_else(|| OwnerEntityKind::of(&self.owner))
    }

    /// True if the record predates canonical ownership types.
    pub fn is_legacy_only(&self) -> bool {
        self.ownership_type.is_none() && self.legacy_type.is_some()
    }
}

/// The ordered owner list of one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipAspect {
    pub owners: Vec<OwnerEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<AuditStamp>,
}

impl OwnershipAspect {
    pub fn new(owners: Vec<OwnerEntry>) -> Self {
        Self {
            owners,
            last_modified: None,
        }
    }

    /// Find the entry for an owner.
    pub fn get(&self, owner: &Urn) -> Option<&OwnerEntry> {
        self.owners.iter().find(|e| &e.owner == owner)
    }

    /// Position of the entry for an owner.
    pub fn position(&self, owner: &Urn) -> Option<usize> {
        self.owners.iter().position(|e| &e.owner == owner)
    }

    /// Number of owners.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Encode as a stored payload.
    pub fn to_payload(&self) -> CoreResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| CoreError::aspect_encode(OWNERSHIP_ASPECT_NAME, e.to_string()))
    }

    /// Decode from a stored payload.
    pub fn from_payload(payload: &serde_json::Value) -> CoreResult<Self> {
        Self::deserialize(payload)
            .map_err(|e| CoreError::aspect_decode(OWNERSHIP_ASPECT_NAME, e.to_string()))
    }
}
