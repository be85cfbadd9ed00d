//! The pure navigation-guard decision function.
//!
//! The decision logic is separated from the navigation side effects
//! (redirecting, notifying) so it can be tested as a plain function of
//! session state and route policy. The [`Navigator`](crate::Navigator)
//! owns the side effects.

use lectern_session::Session;

use crate::policy::AccessPolicy;

/// Where a denied navigation is sent instead.
///
/// The guard names the destination abstractly; the navigator resolves it
/// to a configured route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    /// The platform landing page.
    Home,
    /// The login page.
    Login,
}

/// Why a navigation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The route demands a role this session does not hold.
    InsufficientRole,
    /// The route demands authentication and there is none.
    LoginRequired,
    /// The token expired during this navigation attempt and the session
    /// was logged out.
    SessionExpired,
    /// The account is authenticated but holds no assigned role.
    RoleUnassigned,
}

impl DenialReason {
    /// The user-visible notice for this denial.
    ///
    /// Every denial emits exactly one of these through the notifier.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::InsufficientRole => {
                "You do not have permission to access this page. Please contact an administrator."
            }
            Self::LoginRequired => "Please log in first.",
            Self::SessionExpired => "Your session has expired. Please log in again.",
            Self::RoleUnassigned => {
                "Your account has no role assigned. Please contact an administrator."
            }
        }
    }
}

/// The guard's verdict on one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed to the target route.
    Allow,
    /// Abort the navigation: redirect and notify once.
    Deny {
        /// Where to send the user instead.
        redirect: RedirectKind,
        /// Why, phrased for the notice.
        reason: DenialReason,
    },
}

/// Decides one navigation attempt.
///
/// `expired_now` reports whether this attempt's expiry check just forced a
/// logout; the caller performs that check (and the logout) before calling
/// here, so this function stays pure. On a role-gated route an expired
/// session is denied with the session-expired prompt rather than the
/// generic permission notice: the remedy is to log back in, not to
/// request access.
///
/// Total over the state space: never panics, always returns a decision.
#[must_use]
pub fn evaluate(session: &Session, policy: &AccessPolicy, expired_now: bool) -> Decision {
    match policy {
        AccessPolicy::Public => Decision::Allow,
        AccessPolicy::RequiresRole(required) => {
            let holds_role = session.is_authenticated()
                && required.is_assigned()
                && session.role() == Some(*required);
            if holds_role {
                Decision::Allow
            } else if expired_now && !session.is_authenticated() {
                Decision::Deny {
                    redirect: RedirectKind::Login,
                    reason: DenialReason::SessionExpired,
                }
            } else {
                Decision::Deny {
                    redirect: RedirectKind::Home,
                    reason: DenialReason::InsufficientRole,
                }
            }
        }
        AccessPolicy::Authenticated => {
            if !session.is_authenticated() {
                // An expiry-forced logout lands here too; the prompt is
                // the same either way, since the remedy is to log in.
                Decision::Deny {
                    redirect: RedirectKind::Login,
                    reason: DenialReason::LoginRequired,
                }
            } else if !session.has_assigned_role() {
                Decision::Deny {
                    redirect: RedirectKind::Home,
                    reason: DenialReason::RoleUnassigned,
                }
            } else {
                Decision::Allow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_session::Role;

    const ROLES: [(Role, &str); 3] = [
        (Role::Admin, "管理员"),
        (Role::Teacher, "教师"),
        (Role::Student, "学生"),
    ];

    fn session_with_label(label: &str) -> Session {
        let mut session = Session::new();
        session.login_success("tok", "42".into(), "1".into(), label, 3600);
        session
    }

    #[test]
    fn each_role_passes_its_own_gate_and_fails_others() {
        for (role, label) in ROLES {
            let session = session_with_label(label);
            for (other, _) in ROLES {
                let decision =
                    evaluate(&session, &AccessPolicy::RequiresRole(other), false);
                if other == role {
                    assert_eq!(decision, Decision::Allow, "{role} should pass its own gate");
                } else {
                    assert_eq!(
                        decision,
                        Decision::Deny {
                            redirect: RedirectKind::Home,
                            reason: DenialReason::InsufficientRole,
                        },
                        "{role} should fail the {other} gate"
                    );
                }
            }
        }
    }

    #[test]
    fn anonymous_visitor_fails_role_gate_with_permission_notice() {
        let session = Session::new();
        assert_eq!(
            evaluate(&session, &AccessPolicy::RequiresRole(Role::Teacher), false),
            Decision::Deny {
                redirect: RedirectKind::Home,
                reason: DenialReason::InsufficientRole,
            }
        );
    }

    #[test]
    fn expired_session_fails_role_gate_with_login_prompt() {
        // The navigator has already logged the session out and reports
        // expired_now; the denial must send the user to log back in.
        let session = Session::new();
        assert_eq!(
            evaluate(&session, &AccessPolicy::RequiresRole(Role::Teacher), true),
            Decision::Deny {
                redirect: RedirectKind::Login,
                reason: DenialReason::SessionExpired,
            }
        );
    }

    #[test]
    fn default_role_satisfies_no_role_gate() {
        let session = session_with_label("unknown-label");
        assert_eq!(session.role(), Some(Role::Default));
        assert_eq!(
            evaluate(&session, &AccessPolicy::RequiresRole(Role::Default), false),
            Decision::Deny {
                redirect: RedirectKind::Home,
                reason: DenialReason::InsufficientRole,
            }
        );
    }

    #[test]
    fn authenticated_gate_allows_any_assigned_role() {
        for (_, label) in ROLES {
            let session = session_with_label(label);
            assert_eq!(
                evaluate(&session, &AccessPolicy::Authenticated, false),
                Decision::Allow
            );
        }
    }

    #[test]
    fn authenticated_gate_rejects_anonymous_with_login_prompt() {
        let session = Session::new();
        assert_eq!(
            evaluate(&session, &AccessPolicy::Authenticated, false),
            Decision::Deny {
                redirect: RedirectKind::Login,
                reason: DenialReason::LoginRequired,
            }
        );
    }

    #[test]
    fn authenticated_gate_prompts_login_after_forced_logout() {
        let session = Session::new();
        assert_eq!(
            evaluate(&session, &AccessPolicy::Authenticated, true),
            Decision::Deny {
                redirect: RedirectKind::Login,
                reason: DenialReason::LoginRequired,
            }
        );
    }

    #[test]
    fn authenticated_gate_rejects_unassigned_role() {
        let session = session_with_label("");
        assert_eq!(
            evaluate(&session, &AccessPolicy::Authenticated, false),
            Decision::Deny {
                redirect: RedirectKind::Home,
                reason: DenialReason::RoleUnassigned,
            }
        );
    }

    #[test]
    fn public_routes_always_allow() {
        assert_eq!(
            evaluate(&Session::new(), &AccessPolicy::Public, false),
            Decision::Allow
        );
        assert_eq!(
            evaluate(&Session::new(), &AccessPolicy::Public, true),
            Decision::Allow
        );
        assert_eq!(
            evaluate(&session_with_label("学生"), &AccessPolicy::Public, false),
            Decision::Allow
        );
    }

    #[test]
    fn every_denial_has_a_notice() {
        let reasons = [
            DenialReason::InsufficientRole,
            DenialReason::LoginRequired,
            DenialReason::SessionExpired,
            DenialReason::RoleUnassigned,
        ];
        for reason in reasons {
            assert!(!reason.notice().is_empty());
        }
    }
}
