//! Resolve owner inputs to canonical ownership types.

use tenure_core::LegacyOwnershipType;
use tenure_registry as registry;

use crate::error::MutationResult;
use crate::input::{OwnerInput, ResolvedOwner};

/// Resolve one owner input.
///
/// - A canonical reference wins; the legacy role is taken from the input's
///   legacy name if given, else looked up from the reference.
/// - A legacy-only input resolves through the registry table.
/// - An input with neither is treated as role `NONE`.
pub fn normalize_owner(input: &OwnerInput) -> MutationResult<ResolvedOwner> {
    let legacy = input
        .legacy_type
        .as_deref()
        .map(registry::parse_legacy)
        .transpose()?;

    let (ownership_type, legacy_type) = match (&input.ownership_type, legacy) {
        (Some(urn), Some(legacy)) => (urn.clone(), Some(legacy)),
        (Some(urn), None) => (urn.clone(), registry::legacy_for(urn)),
        (None, Some(legacy)) => (registry::resolve(legacy), Some(legacy)),
        (None, None) => (
            registry::resolve(LegacyOwnershipType::None),
            Some(LegacyOwnershipType::None),
        ),
    };

    Ok(ResolvedOwner {
        owner: input.owner.clone(),
        kind: input.kind,
        ownership_type,
        legacy_type,
    })
}

/// Resolve every owner input, failing on the first unknown role name.
pub fn normalize_owners(inputs: &[OwnerInput]) -> MutationResult<Vec<ResolvedOwner>> {
    inputs.iter().map(normalize_owner).collect()
}
