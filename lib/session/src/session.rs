//! Session state for the running client.
//!
//! The session is the client's record of who is logged in, as what role,
//! and until when. It lives for the lifetime of the client instance and is
//! threaded explicitly into the navigation pipeline rather than held as a
//! global.

use chrono::{DateTime, Duration, Utc};
use lectern_core::{AccountId, RoleId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::role::Role;

/// The authenticated identity and its expiry state.
///
/// Invariant: `authenticated` is true iff `token`, `account_id`, and
/// `expires_at` are all present. State changes only through
/// [`Session::login_success`] and [`Session::logout`]; there is no partial
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential, present while logged in.
    token: Option<String>,
    /// Account identifier of the authenticated user.
    account_id: Option<AccountId>,
    /// Role identifier as assigned by the account service.
    role_id: Option<RoleId>,
    /// Canonical role tag mapped from the service's position label.
    role: Option<Role>,
    /// True iff a login succeeded and no logout has happened since.
    authenticated: bool,
    /// Token lifetime in seconds, as granted at login.
    expires_in: Option<i64>,
    /// Absolute expiry instant: login instant plus `expires_in`.
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates the empty, logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            account_id: None,
            role_id: None,
            role: None,
            authenticated: false,
            expires_in: None,
            expires_at: None,
        }
    }

    /// Records a successful login, overwriting every field.
    ///
    /// The role label is mapped through [`Role::from_label`]; an
    /// unrecognized label yields [`Role::Default`]. The token is stored
    /// as-is, with no format validation.
    pub fn login_success(
        &mut self,
        token: impl Into<String>,
        account_id: AccountId,
        role_id: RoleId,
        role_label: &str,
        expires_in_seconds: i64,
    ) {
        let role = Role::from_label(role_label);
        debug!(account = %account_id, %role, expires_in_seconds, "login recorded");

        self.token = Some(token.into());
        self.account_id = Some(account_id);
        self.role_id = Some(role_id);
        self.role = Some(role);
        self.authenticated = true;
        self.expires_in = Some(expires_in_seconds);
        self.expires_at = Some(Utc::now() + Duration::seconds(expires_in_seconds));
    }

    /// Clears every field back to the logged-out state.
    ///
    /// Idempotent: calling it on an already logged-out session changes
    /// nothing.
    pub fn logout(&mut self) {
        if self.authenticated {
            debug!("logout recorded");
        }
        *self = Self::new();
    }

    /// Returns true if the token should no longer be honored.
    ///
    /// A session with no login, or with no recorded expiry, counts as
    /// expired. Pure read: no state changes, no I/O, local clock only.
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        if !self.authenticated {
            return true;
        }
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            None => true,
        }
    }

    /// Returns true iff a login succeeded and no logout has happened since.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns the bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the authenticated account's ID, if logged in.
    #[must_use]
    pub fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    /// Returns the account-service role ID, if logged in.
    #[must_use]
    pub fn role_id(&self) -> Option<&RoleId> {
        self.role_id.as_ref()
    }

    /// Returns the canonical role tag, if logged in.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns true if the session holds an actual assigned position.
    ///
    /// False when logged out and when the role is [`Role::Default`].
    #[must_use]
    pub fn has_assigned_role(&self) -> bool {
        self.role.is_some_and(|role| role.is_assigned())
    }

    /// Returns the token lifetime granted at login, in seconds.
    #[must_use]
    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }

    /// Returns the absolute expiry instant, if logged in.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher_session() -> Session {
        let mut session = Session::new();
        session.login_success("tok1", "42".into(), "2".into(), "教师", 3600);
        session
    }

    #[test]
    fn new_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.account_id().is_none());
        assert!(session.role().is_none());
        assert!(session.expires_at().is_none());
    }

    #[test]
    fn login_populates_every_field() {
        let before = Utc::now();
        let session = teacher_session();
        let after = Utc::now();

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok1"));
        assert_eq!(session.account_id().map(AccountId::as_str), Some("42"));
        assert_eq!(session.role_id().map(RoleId::as_str), Some("2"));
        assert_eq!(session.role(), Some(Role::Teacher));
        assert_eq!(session.expires_in(), Some(3600));

        let expires_at = session.expires_at().expect("expiry recorded");
        assert!(expires_at >= before + Duration::seconds(3600));
        assert!(expires_at <= after + Duration::seconds(3600));
    }

    #[test]
    fn login_with_unrecognized_label_assigns_default() {
        let mut session = Session::new();
        session.login_success("tok1", "42".into(), "9".into(), "", 3600);

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Default));
        assert!(!session.has_assigned_role());
    }

    #[test]
    fn relogin_overwrites_previous_state() {
        let mut session = teacher_session();
        session.login_success("tok2", "7".into(), "3".into(), "学生", 60);

        assert_eq!(session.token(), Some("tok2"));
        assert_eq!(session.account_id().map(AccountId::as_str), Some("7"));
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.expires_in(), Some(60));
    }

    #[test]
    fn token_not_expired_within_lifetime() {
        let session = teacher_session();
        assert!(!session.is_token_expired());
    }

    #[test]
    fn token_expired_at_lifetime_boundary() {
        // Zero lifetime: the expiry instant is the login instant, and
        // `now >= expires_at` holds from then on.
        let mut session = Session::new();
        session.login_success("tok1", "42".into(), "2".into(), "教师", 0);
        assert!(session.is_token_expired());
    }

    #[test]
    fn token_expired_past_lifetime() {
        let mut session = Session::new();
        session.login_success("tok1", "42".into(), "2".into(), "教师", -1);
        assert!(session.is_token_expired());
    }

    #[test]
    fn token_expired_when_logged_out() {
        let session = Session::new();
        assert!(session.is_token_expired());
    }

    #[test]
    fn token_expired_immediately_after_logout() {
        let mut session = teacher_session();
        session.logout();
        assert!(session.is_token_expired());
    }

    #[test]
    fn login_logout_roundtrip_restores_initial_state() {
        let mut session = teacher_session();
        session.logout();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = teacher_session();
        session.logout();
        let after_first = session.clone();

        session.logout();
        assert_eq!(session, after_first);
    }

    #[test]
    fn session_serialization_roundtrip() {
        let session = teacher_session();
        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(session, parsed);
    }
}
