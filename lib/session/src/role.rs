//! Role tags for platform access control.
//!
//! The account service reports a user's position with a localized label.
//! Navigation policy is written against canonical tags, so the label is
//! mapped through a total function at login time: every input maps to
//! exactly one tag, with unrecognized labels landing on [`Role::Default`].

use serde::{Deserialize, Serialize};

/// Canonical role tag assigned to a session at login.
///
/// `Default` is a real state, not an error: an account can authenticate
/// before anyone has assigned it a position. Such a session holds no
/// role-gated access and fails the role-assigned check on routes that
/// require one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Teaching staff.
    Teacher,
    /// Enrolled student.
    Student,
    /// Authenticated but no position assigned.
    Default,
}

impl Role {
    /// Maps an account-service position label to its canonical tag.
    ///
    /// Total over all input: any label outside the fixed mapping yields
    /// [`Role::Default`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "管理员" => Self::Admin,
            "教师" => Self::Teacher,
            "学生" => Self::Student,
            _ => Self::Default,
        }
    }

    /// Returns the canonical tag name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Default => "default",
        }
    }

    /// Returns true if this tag represents an actual assigned position.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Self::Default)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
