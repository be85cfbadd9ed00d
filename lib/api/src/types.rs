//! Wire types for the account-service gateway.

use lectern_core::{AccountId, RoleId};
use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account name or registered identifier.
    pub username: String,
    /// Plain-text password; the gateway terminates TLS.
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful login payload.
///
/// Everything the session needs: the bearer token, the account identity,
/// the position (role) assignment, and the token lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// The authenticated account's ID.
    pub account_id: AccountId,
    /// The assigned position's ID.
    pub position_id: RoleId,
    /// The assigned position's localized label (e.g. "教师").
    pub position_name: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// One entry of the account service's position list.
///
/// The service is the source of truth for which positions exist and what
/// their labels are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePosition {
    /// Position identifier.
    pub id: RoleId,
    /// Localized position label.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_credentials() {
        let request = LoginRequest::new("alice", "secret");
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn login_response_deserializes_gateway_shape() {
        let json = r#"{
            "token": "tok1",
            "accountId": "42",
            "positionId": "2",
            "positionName": "教师",
            "expiresIn": 3600
        }"#;

        let response: LoginResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.token, "tok1");
        assert_eq!(response.account_id.as_str(), "42");
        assert_eq!(response.position_id.as_str(), "2");
        assert_eq!(response.position_name, "教师");
        assert_eq!(response.expires_in, 3600);
    }

    #[test]
    fn login_response_roundtrip() {
        let response = LoginResponse {
            token: "tok1".to_string(),
            account_id: "42".into(),
            position_id: "2".into(),
            position_name: "学生".to_string(),
            expires_in: 1800,
        };
        let json = serde_json::to_string(&response).expect("serialize");
        let parsed: LoginResponse = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(response, parsed);
    }

    #[test]
    fn position_list_deserializes() {
        let json = r#"[
            {"id": "1", "name": "管理员"},
            {"id": "2", "name": "教师"}
        ]"#;
        let positions: Vec<RolePosition> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].name, "教师");
    }
}
