//! Pipeline configuration.
//!
//! Every setting is optional and read from the environment:
//!
//! - `TENURE_ASYNC_INGEST`: submit proposals asynchronously (default: false)
//! - `TENURE_CONDITIONAL_WRITES`: guard writes with the revision read (default: true)
//! - `TENURE_ENFORCE_OWNER_KIND`: check owner URNs against their kind (default: true)

use std::env;
use tenure_mutation::ValidationOptions;
use tenure_proposal::IngestOptions;
use thiserror::Error;

const ASYNC_INGEST: &str = "TENURE_ASYNC_INGEST";
const CONDITIONAL_WRITES: &str = "TENURE_CONDITIONAL_WRITES";
const ENFORCE_OWNER_KIND: &str = "TENURE_ENFORCE_OWNER_KIND";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Ask the entity service for asynchronous ingestion.
    pub async_ingest: bool,
    /// Reject writes merged against a stale revision.
    pub conditional_writes: bool,
    /// Reject owners whose URN does not match the declared kind.
    pub enforce_owner_kind: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            async_ingest: false,
            conditional_writes: true,
            enforce_owner_kind: true,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to something
    /// other than a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            async_ingest: get_optional_bool(&lookup, ASYNC_INGEST, defaults.async_ingest)?,
            conditional_writes: get_optional_bool(
                &lookup,
                CONDITIONAL_WRITES,
                defaults.conditional_writes,
            )?,
            enforce_owner_kind: get_optional_bool(
                &lookup,
                ENFORCE_OWNER_KIND,
                defaults.enforce_owner_kind,
            )?,
        })
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            enforce_owner_kind: self.enforce_owner_kind,
        }
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            is_async: self.async_ingest,
            conditional_writes: self.conditional_writes,
        }
    }
}

fn get_optional_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_value(
            key,
            format!("expected a boolean, got {raw:?}"),
        )),
    }
}
