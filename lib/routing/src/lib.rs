//! Route table and navigation guard for the lectern client.
//!
//! This crate provides:
//! - Per-route authorization metadata (`AccessPolicy`)
//! - An ordered route registry with path matching (`Route`, `RouteTable`)
//! - The pure guard decision function (`guard::evaluate`)
//! - The navigation pipeline that sequences expiry auto-logout, policy
//!   evaluation, and the redirect/notify side effects (`Navigator`)
//!
//! # Authorization Model
//!
//! Every route declares exactly one policy at registration time: open to
//! everyone, any authenticated account, or a specific role. The guard runs
//! on every navigation attempt, before anything else observes it, and
//! always terminates with a decision: allow, or one redirect plus one
//! user-visible notice.
//!
//! # Example
//!
//! ```
//! use lectern_routing::{
//!     AccessPolicy, NavigationOutcome, Navigator, NavigatorConfig, Route, RouteTable,
//!     TracingNotifier,
//! };
//! use lectern_session::{Role, Session};
//!
//! let mut table = RouteTable::new();
//! table.register(Route::new("home", "/home", AccessPolicy::Public)).unwrap();
//! table.register(Route::new("login", "/login", AccessPolicy::Public)).unwrap();
//! table
//!     .register(Route::new("grading", "/grading", AccessPolicy::RequiresRole(Role::Teacher)))
//!     .unwrap();
//!
//! let navigator =
//!     Navigator::new(table, NavigatorConfig::default(), Box::new(TracingNotifier)).unwrap();
//!
//! let mut session = Session::new();
//! session.login_success("tok", "42".into(), "2".into(), "教师", 3600);
//!
//! assert!(matches!(
//!     navigator.navigate(&mut session, "/grading"),
//!     NavigationOutcome::Allowed { .. }
//! ));
//! ```

pub mod error;
pub mod guard;
pub mod navigator;
pub mod notify;
pub mod policy;
pub mod route;
pub mod table;

// Re-export main types at crate root
pub use error::RoutingError;
pub use guard::{Decision, DenialReason, RedirectKind};
pub use navigator::{NavigationOutcome, Navigator, NavigatorConfig};
pub use notify::{Notifier, TracingNotifier};
pub use policy::AccessPolicy;
pub use route::Route;
pub use table::{PathMatch, RouteTable};
