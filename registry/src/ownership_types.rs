//! Legacy role <-> ownership-type URN table.

use tenure_core::{LegacyOwnershipType, Urn, OWNERSHIP_TYPE_ENTITY};

use crate::error::{RegistryError, RegistryResult};

/// Key prefix shared by the built-in ownership types.
pub const SYSTEM_TYPE_PREFIX: &str = "__system__";

/// The canonical URN string for a legacy role.
fn canonical_str(legacy: LegacyOwnershipType) -> &'static str {
    match legacy {
        LegacyOwnershipType::TechnicalOwner => "urn:li:ownershipType:__system__technical_owner",
        LegacyOwnershipType::BusinessOwner => "urn:li:ownershipType:__system__business_owner",
        LegacyOwnershipType::DataSteward => "urn:li:ownershipType:__system__data_steward",
        LegacyOwnershipType::None => "urn:li:ownershipType:__system__none",
        LegacyOwnershipType::Dataowner => "urn:li:ownershipType:__system__dataowner",
        LegacyOwnershipType::Producer => "urn:li:ownershipType:__system__producer",
        LegacyOwnershipType::Developer => "urn:li:ownershipType:__system__developer",
        LegacyOwnershipType::Delegate => "urn:li:ownershipType:__system__delegate",
        LegacyOwnershipType::Consumer => "urn:li:ownershipType:__system__consumer",
        LegacyOwnershipType::Stakeholder => "urn:li:ownershipType:__system__stakeholder",
    }
}

/// Parse a legacy role name such as `TECHNICAL_OWNER`.
///
/// Names are matched case-sensitively against the stable upper-snake form.
pub fn parse_legacy(name: &str) -> RegistryResult<LegacyOwnershipType> {
    LegacyOwnershipType::ALL
        .into_iter()
        .find(|legacy| legacy.name() == name)
        .ok_or_else(|| RegistryError::unknown_ownership_type(name))
}

/// The canonical ownership-type reference for a legacy role.
pub fn resolve(legacy: LegacyOwnershipType) -> Urn {
    Urn::parse(canonical_str(legacy)).expect("system ownership type URNs are well-formed")
}

/// Parse a legacy role name and resolve it.
pub fn resolve_name(name: &str) -> RegistryResult<Urn> {
    parse_legacy(name).map(resolve)
}

/// The legacy role a canonical reference stands for.
///
/// Returns `None` for custom ownership types and for URNs that are not
/// ownership types at all.
pub fn legacy_for(urn: &Urn) -> Option<LegacyOwnershipType> {
    if urn.entity_type() != OWNERSHIP_TYPE_ENTITY {
        return None;
    }
    LegacyOwnershipType::ALL
        .into_iter()
        .find(|legacy| canonical_str(*legacy) == urn.as_str())
}
