//! Tenure Registry
//!
//! Fixed lookup between legacy ownership roles and canonical ownership-type
//! references.
//!
//! Responsibilities:
//! - Parse legacy role names received from callers
//! - Map every legacy role to its system ownership-type URN
//! - Map system ownership-type URNs back to legacy roles
//!
//! The table is closed: adding a legacy role is a compile error until it is
//! given a canonical reference.

mod error;
mod ownership_types;

pub use error::{RegistryError, RegistryResult};
pub use ownership_types::{legacy_for, parse_legacy, resolve, resolve_name, SYSTEM_TYPE_PREFIX};
