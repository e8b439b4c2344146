//! Aspect versions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which version of an aspect to read.
///
/// Version 0 always addresses the latest value. Positive versions address
/// history, 1 being the oldest retained write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AspectVersion(pub u64);

impl AspectVersion {
    /// The latest value.
    pub const LATEST: AspectVersion = AspectVersion(0);

    pub fn new(version: u64) -> Self {
        Self(version)
    }

    pub fn is_latest(&self) -> bool {
        self.0 == 0
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AspectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_latest() {
            f.write_str("latest")
        } else {
            write!(f, "v{}", self.0)
        }
    }
}

/// An aspect value together with the store revision it was read at.
///
/// `revision` counts writes to the aspect; it is what conditional writes
/// compare against.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedAspect<T> {
    pub revision: u64,
    pub value: T,
}

impl<T> VersionedAspect<T> {
    pub fn new(revision: u64, value: T) -> Self {
        Self { revision, value }
    }

    /// Transform the value, keeping the revision.
    pub fn try_map<U, E>(
        self,
        f: impl FnOnce(T) -> Result<U, E>,
    ) -> Result<VersionedAspect<U>, E> {
        Ok(VersionedAspect {
            revision: self.revision,
            value: f(self.value)?,
        })
    }
}
