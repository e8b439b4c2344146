//! Audit stamp sources.

use chrono::Utc;
use tenure_core::{AuditStamp, Urn};

/// Supplies the audit stamp for each proposal.
pub trait AuditStampSource: Send + Sync {
    fn stamp(&self, actor: &Urn) -> AuditStamp;
}

/// Stamps with the current wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl AuditStampSource for SystemClock {
    fn stamp(&self, actor: &Urn) -> AuditStamp {
        AuditStamp::new(actor.clone(), Utc::now().timestamp_millis())
    }
}
