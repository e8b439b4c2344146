//! Request types received from the request layer.

use serde::Deserialize;
use tenure_core::{LegacyOwnershipType, OwnerEntityKind, Urn};

/// One owner to add, as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerInput {
    #[serde(rename = "ownerUrn")]
    pub owner: Urn,
    #[serde(rename = "ownerEntityType")]
    pub kind: OwnerEntityKind,
    /// Canonical ownership-type reference. Takes precedence over `legacy_type`.
    #[serde(rename = "ownershipTypeUrn", default)]
    pub ownership_type: Option<Urn>,
    /// Deprecated role name, e.g. `TECHNICAL_OWNER`, kept unparsed so that
    /// unknown names are reported rather than rejected at decode time.
    #[serde(rename = "type", default)]
    pub legacy_type: Option<String>,
}

impl OwnerInput {
    /// An owner with a canonical ownership type.
    pub fn new(owner: Urn, kind: OwnerEntityKind, ownership_type: Urn) -> Self {
        Self {
            owner,
            kind,
            ownership_type: Some(ownership_type),
            legacy_type: None,
        }
    }

    /// An owner with only a legacy role name.
    pub fn legacy(owner: Urn, kind: OwnerEntityKind, legacy_type: impl Into<String>) -> Self {
        Self {
            owner,
            kind,
            ownership_type: None,
            legacy_type: Some(legacy_type.into()),
        }
    }

    /// Attach a legacy role name as well.
    pub fn with_legacy_type(mut self, legacy_type: impl Into<String>) -> Self {
        self.legacy_type = Some(legacy_type.into());
        self
    }
}

/// Add owners to one resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOwnersRequest {
    #[serde(rename = "resourceUrn")]
    pub resource: Urn,
    pub owners: Vec<OwnerInput>,
}

impl AddOwnersRequest {
    pub fn new(resource: Urn, owners: Vec<OwnerInput>) -> Self {
        Self { resource, owners }
    }
}

/// Add the same owners to several resources in one write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAddOwnersRequest {
    pub resources: Vec<Urn>,
    pub owners: Vec<OwnerInput>,
}

impl BatchAddOwnersRequest {
    pub fn new(resources: Vec<Urn>, owners: Vec<OwnerInput>) -> Self {
        Self { resources, owners }
    }
}

/// An owner input after ownership-type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOwner {
    pub owner: Urn,
    pub kind: OwnerEntityKind,
    pub ownership_type: Urn,
    pub legacy_type: Option<LegacyOwnershipType>,
}
