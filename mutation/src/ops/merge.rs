//! Merge new owners into an ownership aspect.
//!
//! Owners are keyed by URN. An incoming owner that is already present
//! replaces the existing record in place; a new owner is appended. Stored
//! records repeating an owner are collapsed to the first one. The existing
//! aspect is never modified; a new one is built.

use tenure_core::{AuditStamp, LegacyOwnershipType, OwnerEntry, OwnershipAspect, OwnershipSource};

use crate::input::ResolvedOwner;

/// Counts of what a merge did to the owner list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Owners appended to the list.
    pub added: usize,
    /// Existing records replaced in place.
    pub replaced: usize,
    /// Replaced records that previously carried only a legacy role.
    pub upgraded: usize,
    /// Stored records dropped because an earlier record had the same owner.
    pub collapsed: usize,
}

/// Merge `incoming` into `existing`, stamping the result with `stamp`.
pub fn merge(
    existing: Option<&OwnershipAspect>,
    incoming: &[ResolvedOwner],
    stamp: &AuditStamp,
    source: &OwnershipSource,
) -> OwnershipAspect {
    merge_counted(existing, incoming, stamp, source).0
}

/// Like [`merge`], also reporting what changed.
pub fn merge_counted(
    existing: Option<&OwnershipAspect>,
    incoming: &[ResolvedOwner],
    stamp: &AuditStamp,
    source: &OwnershipSource,
) -> (OwnershipAspect, MergeStats) {
    let mut stats = MergeStats::default();
    let mut owners: Vec<OwnerEntry> = Vec::new();
    for entry in existing.map(|a| a.owners.as_slice()).unwrap_or_default() {
        if owners.iter().any(|e| e.owner == entry.owner) {
            stats.collapsed += 1;
        } else {
            owners.push(entry.clone());
        }
    }

    for owner in incoming {
        match owners.iter().position(|e| e.owner == owner.owner) {
            Some(index) => {
                let previous = &owners[index];
                // A legacy-only record keeps its role when the new type has none.
                let legacy_type = if previous.is_legacy_only() {
                    stats.upgraded += 1;
                    owner.legacy_type.or(previous.legacy_type)
                } else {
                    owner.legacy_type
                };
                owners[index] = entry_for(owner, legacy_type, source);
                stats.replaced += 1;
            }
            None => {
                owners.push(entry_for(owner, owner.legacy_type, source));
                stats.added += 1;
            }
        }
    }

    let aspect = OwnershipAspect {
        owners,
        last_modified: Some(stamp.clone()),
    };
    (aspect, stats)
}

fn entry_for(
    owner: &ResolvedOwner,
    legacy_type: Option<LegacyOwnershipType>,
    source: &OwnershipSource,
) -> OwnerEntry {
    OwnerEntry {
        owner: owner.owner.clone(),
        kind: Some(owner.kind),
        ownership_type: Some(owner.ownership_type.clone()),
        legacy_type,
        source: source.clone(),
    }
}
