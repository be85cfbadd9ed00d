//! Routing error types.

use std::fmt;

/// Errors from route table construction and validation.
///
/// Navigation itself never errors: once a table validates, every
/// navigation attempt terminates with a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A route with this name is already registered.
    DuplicateRoute {
        /// The conflicting route name.
        name: String,
    },
    /// A route name was referenced but never registered.
    UnknownRoute {
        /// The missing route name.
        name: String,
    },
    /// Following a route's redirects returns to an already-visited route.
    RedirectLoop {
        /// The route whose redirect chain loops.
        name: String,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoute { name } => {
                write!(f, "route '{name}' is already registered")
            }
            Self::UnknownRoute { name } => {
                write!(f, "route '{name}' is not registered")
            }
            Self::RedirectLoop { name } => {
                write!(f, "redirect chain from route '{name}' loops")
            }
        }
    }
}

impl std::error::Error for RoutingError {}
