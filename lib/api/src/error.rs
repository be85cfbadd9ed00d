//! API error types.

use std::fmt;

/// Errors from account-service calls.
#[derive(Debug)]
pub enum ApiError {
    /// The gateway could not be reached.
    ConnectionFailed {
        /// Error details.
        details: String,
    },
    /// The gateway answered with a non-success status.
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Error details.
        details: String,
    },
    /// The response body did not match the expected shape.
    InvalidResponse {
        /// Error details.
        details: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed { details } => {
                write!(f, "failed to reach the account service: {details}")
            }
            Self::RequestFailed { status, details } => {
                write!(f, "account service request failed ({status}): {details}")
            }
            Self::InvalidResponse { details } => {
                write!(f, "invalid account service response: {details}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failed_display() {
        let err = ApiError::ConnectionFailed {
            details: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("failed to reach"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn request_failed_display_includes_status() {
        let err = ApiError::RequestFailed {
            status: 401,
            details: "bad credentials".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("bad credentials"));
    }

    #[test]
    fn invalid_response_display() {
        let err = ApiError::InvalidResponse {
            details: "missing field `token`".to_string(),
        };
        assert!(err.to_string().contains("invalid account service response"));
    }
}
