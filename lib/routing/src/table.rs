//! The ordered route registry and its path matcher.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::RoutingError;
use crate::route::Route;

/// A successful path match: the route plus any bound `:param` segments.
#[derive(Debug, PartialEq, Eq)]
pub struct PathMatch<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// Parameter bindings, keyed by the pattern's segment names.
    pub params: HashMap<String, String>,
}

/// Ordered registry of routes.
///
/// Matching walks registration order and the first pattern that fits
/// wins, so more specific routes must be registered before overlapping
/// `:param` patterns.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::DuplicateRoute`] if a route with the same
    /// name is already registered.
    pub fn register(&mut self, route: Route) -> Result<(), RoutingError> {
        if self.find(route.name()).is_some() {
            return Err(RoutingError::DuplicateRoute {
                name: route.name().to_string(),
            });
        }
        debug!(name = route.name(), path = route.path(), "route registered");
        self.routes.push(route);
        Ok(())
    }

    /// Looks a route up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name() == name)
    }

    /// Matches a concrete path against the registered patterns.
    ///
    /// Returns the first route (in registration order) whose pattern fits,
    /// with its `:param` segments bound.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathMatch<'_>> {
        let segments = split_path(path);
        self.routes.iter().find_map(|route| {
            match_pattern(route.path(), &segments).map(|params| PathMatch { route, params })
        })
    }

    /// Checks that every redirect target exists and no redirect chain
    /// loops.
    ///
    /// Redirect targets are route names, so both conditions are static
    /// properties of the table.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownRoute`] for a dangling target and
    /// [`RoutingError::RedirectLoop`] for a cyclic chain.
    pub fn validate(&self) -> Result<(), RoutingError> {
        for route in &self.routes {
            let mut visited = HashSet::new();
            visited.insert(route.name());

            let mut current = route;
            while let Some(target) = current.redirect_target() {
                let next = self.find(target).ok_or_else(|| RoutingError::UnknownRoute {
                    name: target.to_string(),
                })?;
                if !visited.insert(next.name()) {
                    return Err(RoutingError::RedirectLoop {
                        name: route.name().to_string(),
                    });
                }
                current = next;
            }
        }
        Ok(())
    }

    /// Returns the registered routes in registration order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Splits a path into its non-empty segments.
///
/// Leading and trailing slashes are insignificant: `/home/` and `/home`
/// name the same location.
fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Matches a pattern against pre-split path segments, binding `:params`.
fn match_pattern(pattern: &str, segments: &[&str]) -> Option<HashMap<String, String>> {
    let pattern_segments = split_path(pattern);
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pattern_segment, segment) in pattern_segments.iter().zip(segments) {
        if let Some(param) = pattern_segment.strip_prefix(':') {
            params.insert(param.to_string(), (*segment).to_string());
        } else if pattern_segment != segment {
            return None;
        }
    }
    Some(params)
}
