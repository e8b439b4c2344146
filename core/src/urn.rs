//! Stable entity references.
//!
//! A URN names one entity in the catalog and has the shape
//! `urn:li:<entityType>:<key>`. URNs are immutable once parsed.

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{CoreError, CoreResult};

/// Entity type of user owners.
pub const CORP_USER_ENTITY: &str = "corpuser";

/// Entity type of group owners.
pub const CORP_GROUP_ENTITY: &str = "corpGroup";

/// Entity type of ownership type definitions.
pub const OWNERSHIP_TYPE_ENTITY: &str = "ownershipType";

fn urn_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Entity type is an identifier; the key is anything non-empty without whitespace.
        Regex::new(r"^urn:li:([A-Za-z][A-Za-z0-9_]*):(\S+)$")
            .expect("static URN pattern compiles")
    })
}

/// A stable, globally unique entity reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn {
    raw: String,
    /// Byte offset where the key starts.
    key_start: usize,
    /// Byte offset where the entity type ends.
    type_end: usize,
}

impl Urn {
    const PREFIX: &'static str = "urn:li:";

    /// Parse a URN from its string form.
    pub fn parse(input: impl Into<String>) -> CoreResult<Self> {
        let raw = input.into();
        let captures = urn_pattern()
            .captures(&raw)
            .ok_or_else(|| CoreError::invalid_urn(&raw))?;
        let entity_type = captures.get(1).ok_or_else(|| CoreError::invalid_urn(&raw))?;
        let key = captures.get(2).ok_or_else(|| CoreError::invalid_urn(&raw))?;
        let (type_end, key_start) = (entity_type.end(), key.start());
        Ok(Self {
            raw,
            key_start,
            type_end,
        })
    }

    /// Build a URN from an entity type and key.
    pub fn from_parts(entity_type: &str, key: &str) -> CoreResult<Self> {
        Self::parse(format!("{}{}:{}", Self::PREFIX, entity_type, key))
    }

    /// The entity type segment, e.g. `corpuser` or `dataset`.
    pub fn entity_type(&self) -> &str {
        &self.raw[Self::PREFIX.len()..self.type_end]
    }

    /// Everything after the entity type.
    pub fn key(&self) -> &str {
        &self.raw[self.key_start..]
    }

    /// The full string form.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Urn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Urn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Urn::parse(raw).map_err(serde::de::Error::custom)
    }
}
