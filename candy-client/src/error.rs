//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error reported by the backend
    #[error("API error {code}: {message}")]
    Api {
        code: String,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Identity provider rejected the request
    #[error("Auth error: {0}")]
    Auth(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Transport-level failure (no response from the backend)
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, err.to_string())
            }
            ClientError::Http(_) => AppError::with_message(ErrorCode::NetworkError, err.to_string()),
            ClientError::Auth(msg) => AppError::with_message(ErrorCode::InvalidCredentials, msg.clone()),
            ClientError::Unauthorized(_) => AppError::not_authenticated(),
            ClientError::Forbidden(msg) => AppError::permission_denied(msg.clone()),
            ClientError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg.clone()),
            ClientError::Validation(msg) => AppError::validation(msg.clone()),
            ClientError::Api { message, .. } => AppError::store(message.clone()),
            _ => AppError::internal(err.to_string()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_app_error() {
        let err: AppError = ClientError::Auth("Invalid login credentials".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);

        let err: AppError = ClientError::Api {
            code: "23505".into(),
            message: "duplicate key".into(),
            details: None,
        }
        .into();
        assert_eq!(err.code, ErrorCode::StoreError);
        assert_eq!(err.message, "duplicate key");
    }
}
