//! Route definitions.

use serde::{Deserialize, Serialize};

use crate::policy::AccessPolicy;

/// A navigable route: a named path pattern with its authorization policy.
///
/// Path patterns are `/`-separated; a segment starting with `:` binds the
/// corresponding path segment as a parameter (e.g.
/// `/course/teacher/:course_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Unique route name, used for redirects and lookups.
    name: String,
    /// Path pattern the route matches.
    path: String,
    /// Authorization requirement, fixed at registration.
    policy: AccessPolicy,
    /// Name of the route to forward to instead of rendering this one.
    redirect: Option<String>,
}

impl Route {
    /// Creates a route with the given policy.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, policy: AccessPolicy) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            policy,
            redirect: None,
        }
    }

    /// Creates a route that forwards to another route by name.
    ///
    /// The target's policy governs the navigation; a forwarding route has
    /// no policy of its own.
    #[must_use]
    pub fn redirect(
        name: impl Into<String>,
        path: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            policy: AccessPolicy::Public,
            redirect: Some(target.into()),
        }
    }

    /// Returns the route name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path pattern.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the authorization policy.
    #[must_use]
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Returns the redirect target name, if this route forwards.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_session::Role;

    #[test]
    fn new_route_has_no_redirect() {
        let route = Route::new("home", "/home", AccessPolicy::Public);
        assert_eq!(route.name(), "home");
        assert_eq!(route.path(), "/home");
        assert_eq!(route.policy(), &AccessPolicy::Public);
        assert!(route.redirect_target().is_none());
    }

    #[test]
    fn redirect_route_carries_target() {
        let route = Route::redirect("root", "/", "home");
        assert_eq!(route.redirect_target(), Some("home"));
    }

    #[test]
    fn route_serialization_roundtrip() {
        let route = Route::new(
            "grading",
            "/grading/:course_id",
            AccessPolicy::RequiresRole(Role::Teacher),
        );
        let json = serde_json::to_string(&route).expect("serialize");
        let parsed: Route = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(route, parsed);
    }
}
