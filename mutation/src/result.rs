//! Result types for prepared writes.

use tenure_core::{OwnershipAspect, Urn};

use crate::ops::MergeStats;

/// A complete replacement aspect, ready to be proposed.
#[derive(Debug, Clone)]
pub struct PreparedOwnership {
    /// The resource the aspect belongs to.
    pub resource: Urn,
    /// Store revision the merge was based on (0 when no aspect existed).
    pub base_revision: u64,
    /// The merged aspect.
    pub aspect: OwnershipAspect,
    /// What the merge did.
    pub stats: MergeStats,
}

impl PreparedOwnership {
    /// True if no aspect existed before this write.
    pub fn is_first_write(&self) -> bool {
        self.base_revision == 0
    }
}
