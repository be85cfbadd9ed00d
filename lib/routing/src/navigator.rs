//! The navigation pipeline.
//!
//! The navigator is the sole authorization checkpoint: every navigation
//! attempt passes through [`Navigator::navigate`] before the target is
//! observed. It sequences the expiry auto-logout, the path match (with
//! declared redirects), the pure guard decision, and the deny-path side
//! effects.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use lectern_session::Session;

use crate::error::RoutingError;
use crate::guard::{self, Decision, DenialReason, RedirectKind};
use crate::notify::Notifier;
use crate::table::RouteTable;

/// Upper bound on redirect hops during one navigation.
///
/// A validated table cannot loop; the bound covers tables that skipped
/// [`RouteTable::validate`].
const MAX_REDIRECT_HOPS: usize = 8;

/// Navigator configuration: where denials send the user.
///
/// Fields with defaults can be omitted when loading from environment
/// variables.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigatorConfig {
    /// Name of the landing route for permission denials.
    #[serde(default = "default_home_route")]
    pub home_route: String,

    /// Name of the login route for authentication denials.
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

fn default_home_route() -> String {
    "home".to_string()
}

fn default_login_route() -> String {
    "login".to_string()
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            home_route: default_home_route(),
            login_route: default_login_route(),
        }
    }
}

/// Result of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The target route may render.
    Allowed {
        /// Name of the route that matched (after declared redirects).
        route: String,
        /// Path parameters bound by the match.
        params: HashMap<String, String>,
    },
    /// The guard denied the navigation and the user was sent elsewhere.
    Redirected {
        /// Name of the route the user was sent to.
        to: String,
        /// Why the navigation was denied.
        reason: DenialReason,
    },
    /// No registered route matches the path.
    NotFound {
        /// The path that failed to match.
        path: String,
    },
}

/// Owns the route table, the denial destinations, and the notifier.
///
/// The session is not owned here: it is threaded into each call so the
/// application controls its lifecycle.
pub struct Navigator {
    table: RouteTable,
    config: NavigatorConfig,
    notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("table", &self.table)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Creates a navigator over a validated table.
    ///
    /// # Errors
    ///
    /// Returns the table's validation error, or
    /// [`RoutingError::UnknownRoute`] if the configured home or login
    /// route is not registered.
    pub fn new(
        table: RouteTable,
        config: NavigatorConfig,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, RoutingError> {
        table.validate()?;
        for name in [&config.home_route, &config.login_route] {
            if table.find(name).is_none() {
                return Err(RoutingError::UnknownRoute { name: name.clone() });
            }
        }
        Ok(Self {
            table,
            config,
            notifier,
        })
    }

    /// Returns the route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decides one navigation attempt.
    ///
    /// Runs to completion before the caller proceeds: the outcome is the
    /// navigation decision, and on denial the notice has already been
    /// emitted. Never panics; an unmatched path yields
    /// [`NavigationOutcome::NotFound`].
    #[instrument(skip(self, session))]
    pub fn navigate(&self, session: &mut Session, path: &str) -> NavigationOutcome {
        // Expiry is checked on every attempt, before the target is even
        // looked at, so a stale login never influences the decision.
        let expired_now = session.is_authenticated() && session.is_token_expired();
        if expired_now {
            debug!("token expired, forcing logout");
            session.logout();
        }

        let Some(matched) = self.table.match_path(path) else {
            debug!(path, "no route matches");
            return NavigationOutcome::NotFound {
                path: path.to_string(),
            };
        };

        let mut route = matched.route;
        let mut hops = 0;
        while let Some(target) = route.redirect_target() {
            hops += 1;
            if hops > MAX_REDIRECT_HOPS {
                warn!(start = matched.route.name(), "redirect chain exceeded hop bound");
                return NavigationOutcome::NotFound {
                    path: path.to_string(),
                };
            }
            match self.table.find(target) {
                Some(next) => route = next,
                None => {
                    warn!(target, "redirect target missing");
                    return NavigationOutcome::NotFound {
                        path: path.to_string(),
                    };
                }
            }
        }

        match guard::evaluate(session, route.policy(), expired_now) {
            Decision::Allow => {
                debug!(route = route.name(), policy = %route.policy(), "navigation allowed");
                NavigationOutcome::Allowed {
                    route: route.name().to_string(),
                    params: matched.params,
                }
            }
            Decision::Deny { redirect, reason } => {
                let to = match redirect {
                    RedirectKind::Home => self.config.home_route.clone(),
                    RedirectKind::Login => self.config.login_route.clone(),
                };
                debug!(
                    route = route.name(),
                    policy = %route.policy(),
                    ?reason,
                    to,
                    "navigation denied"
                );
                self.notifier.notify(reason.notice());
                NavigationOutcome::Redirected { to, reason }
            }
        }
    }
}
