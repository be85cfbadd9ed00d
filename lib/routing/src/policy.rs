//! Per-route authorization policy.

use lectern_session::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization requirement attached to a route at registration time.
///
/// Immutable after registration; the guard reads it on every navigation
/// to the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessPolicy {
    /// Open to everyone, including anonymous visitors.
    Public,
    /// Any authenticated account with an assigned role.
    Authenticated,
    /// Only authenticated accounts holding this specific role.
    RequiresRole(Role),
}

impl AccessPolicy {
    /// Returns true if the route is open to anonymous visitors.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Returns the specific role this policy demands, if any.
    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::RequiresRole(role) => Some(*role),
            _ => None,
        }
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Authenticated => write!(f, "authenticated"),
            Self::RequiresRole(role) => write!(f, "requires role '{role}'"),
        }
    }
}
