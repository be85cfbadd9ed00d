//! HTTP client for the account-service gateway.

use crate::error::ApiError;
use crate::types::{LoginRequest, LoginResponse, RolePosition};
use async_trait::async_trait;
use rootcause::prelude::Report;
use std::time::Duration;
use tracing::{debug, instrument};

/// The backend call surface the client core depends on.
///
/// Implementations authenticate an account and report which positions
/// (roles) the platform knows. Nothing downstream cares how.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Authenticates and returns the session-establishing payload.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Report<ApiError>>;

    /// Fetches the account service's position list.
    async fn fetch_roles(&self) -> Result<Vec<RolePosition>, Report<ApiError>>;
}

/// [`AuthApi`] implementation over the account-service HTTP gateway.
#[derive(Debug, Clone)]
pub struct AccountServiceClient {
    base_url: String,
    http: reqwest::Client,
}

impl AccountServiceClient {
    /// Creates a client against the given gateway base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConnectionFailed`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, Report<ApiError>> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ConnectionFailed {
                details: e.to_string(),
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, Report<ApiError>> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let details = response.text().await.unwrap_or_default();
        Err(ApiError::RequestFailed {
            status: status.as_u16(),
            details,
        }
        .into())
    }
}

#[async_trait]
impl AuthApi for AccountServiceClient {
    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, Report<ApiError>> {
        let response = self
            .http
            .post(self.endpoint("/api/account_service/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed {
                details: e.to_string(),
            })?;

        let response = Self::check(response).await?;
        let payload: LoginResponse =
            response.json().await.map_err(|e| ApiError::InvalidResponse {
                details: e.to_string(),
            })?;

        debug!(account = %payload.account_id, position = %payload.position_name, "login succeeded");
        Ok(payload)
    }

    #[instrument(skip(self))]
    async fn fetch_roles(&self) -> Result<Vec<RolePosition>, Report<ApiError>> {
        let response = self
            .http
            .get(self.endpoint("/api/account_service/positions"))
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed {
                details: e.to_string(),
            })?;

        let response = Self::check(response).await?;
        let positions: Vec<RolePosition> =
            response.json().await.map_err(|e| ApiError::InvalidResponse {
                details: e.to_string(),
            })?;

        debug!(count = positions.len(), "position list fetched");
        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = AccountServiceClient::new("http://localhost:8080", Duration::from_secs(10))
            .expect("client");
        assert_eq!(
            client.endpoint("/api/account_service/login"),
            "http://localhost:8080/api/account_service/login"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let client = AccountServiceClient::new("http://localhost:8080/", Duration::from_secs(10))
            .expect("client");
        assert_eq!(
            client.endpoint("/api/account_service/positions"),
            "http://localhost:8080/api/account_service/positions"
        );
    }
}
