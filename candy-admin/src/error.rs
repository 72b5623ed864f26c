//! Application error type

use candy_client::ClientError;
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::session::SessionCacheError;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Validation, auth and domain failures with a user-facing message
    #[error(transparent)]
    App(#[from] AppError),

    /// Remote store or identity provider failure
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Session cache error: {0}")]
    Cache(#[from] SessionCacheError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdminError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AdminError::App(e) => e.code,
            AdminError::Client(ClientError::Auth(_)) => ErrorCode::InvalidCredentials,
            AdminError::Client(e) if e.is_network() => ErrorCode::NetworkError,
            AdminError::Client(_) => ErrorCode::StoreError,
            AdminError::Cache(_) | AdminError::Io(_) | AdminError::Json(_) => ErrorCode::InternalError,
        }
    }

    /// Message suitable for an error slot or banner
    pub fn user_message(&self) -> String {
        match self {
            AdminError::App(e) => e.message.clone(),
            AdminError::Client(ClientError::Api { message, .. }) => message.clone(),
            AdminError::Client(ClientError::Auth(message)) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Response discarded because a newer request was issued
    pub fn is_superseded(&self) -> bool {
        matches!(self, AdminError::App(e) if e.code == ErrorCode::RequestSuperseded)
    }

    pub fn is_auth(&self) -> bool {
        matches!(self.code(), ErrorCode::InvalidCredentials | ErrorCode::NotAuthenticated)
    }
}

impl From<ErrorCode> for AdminError {
    fn from(code: ErrorCode) -> Self {
        AdminError::App(AppError::new(code))
    }
}

pub type AdminResult<T> = Result<T, AdminError>;
