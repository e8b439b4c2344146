//! Authorization interface.

use std::fmt;
use tenure_core::Urn;

/// Privileged actions the pipeline checks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add or change owners of a resource.
    MutateOwnership,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::MutateOwnership => "MUTATE_OWNERSHIP",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether an actor may perform an action on a resource.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self, actor: &Urn, action: Action, resource: &Urn) -> bool;
}
