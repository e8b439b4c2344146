//! Audit metadata attached to every write.

use serde::{Deserialize, Serialize};

use crate::Urn;

/// Who changed an aspect, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    /// The acting principal.
    pub actor: Urn,
    /// Milliseconds since the Unix epoch.
    pub time: i64,
}

impl AuditStamp {
    pub fn new(actor: Urn, time: i64) -> Self {
        Self { actor, time }
    }
}
