//! Session state and role mapping for the lectern client.
//!
//! This crate provides:
//! - Role mapping (`Role`): canonical role tags derived from the account
//!   service's localized position labels
//! - Session state (`Session`): the client's single mutable record of the
//!   authenticated identity and its token expiry
//!
//! # Session Model
//!
//! One `Session` exists per running client. It is created empty at
//! application start, populated only by [`Session::login_success`], and
//! cleared only by [`Session::logout`], whether called explicitly or by
//! the navigation guard when it detects an expired token.
//!
//! # Example
//!
//! ```
//! use lectern_session::{Role, Session};
//!
//! let mut session = Session::new();
//! session.login_success("tok1", "42".into(), "2".into(), "教师", 3600);
//!
//! assert!(session.is_authenticated());
//! assert_eq!(session.role(), Some(Role::Teacher));
//! assert!(!session.is_token_expired());
//!
//! session.logout();
//! assert!(session.is_token_expired());
//! ```

pub mod role;
pub mod session;

// Re-export main types at crate root
pub use role::Role;
pub use session::Session;
