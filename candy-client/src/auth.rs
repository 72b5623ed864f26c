//! Identity provider
//!
//! Password sign-in/sign-up against the hosted auth service
//! ([`GoTrueAuth`]) or an in-process registry ([`crate::MemoryIdentity`]).

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult, RestClient};

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Sign-in / sign-up / sign-out capability
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session>;

    /// `None` when the provider requires email confirmation first
    async fn sign_up(&self, email: &str, password: &str) -> ClientResult<Option<Session>>;

    async fn sign_out(&self, session: &Session) -> ClientResult<()>;
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(|| now + Duration::seconds(self.expires_in.unwrap_or(3600)));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Hosted auth service client
#[derive(Debug, Clone)]
pub struct GoTrueAuth {
    client: RestClient,
}

impl GoTrueAuth {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.client.config().auth_url(), path)
    }
}

/// Any rejection from the auth endpoints is a credential problem for the caller
fn as_auth_error(err: ClientError) -> ClientError {
    match err {
        ClientError::Api { message, .. } => ClientError::Auth(message),
        ClientError::Validation(msg) | ClientError::Unauthorized(msg) => ClientError::Auth(msg),
        other => other,
    }
}

#[async_trait]
impl IdentityProvider for GoTrueAuth {
    async fn sign_in(&self, email: &str, password: &str) -> ClientResult<Session> {
        let response: TokenResponse = self
            .client
            .post(&self.url("token?grant_type=password"), &Credentials { email, password })
            .await
            .map_err(as_auth_error)?;
        tracing::info!(user_id = %response.user.id, "Signed in");
        Ok(response.into_session(Utc::now()))
    }

    async fn sign_up(&self, email: &str, password: &str) -> ClientResult<Option<Session>> {
        let body: serde_json::Value = self
            .client
            .post(&self.url("signup"), &Credentials { email, password })
            .await
            .map_err(as_auth_error)?;
        // Confirmation-required projects return the bare user without a token
        if body.get("access_token").is_none() {
            tracing::info!(email = %email, "Signed up, confirmation pending");
            return Ok(None);
        }
        let response: TokenResponse = serde_json::from_value(body)?;
        Ok(Some(response.into_session(Utc::now())))
    }

    async fn sign_out(&self, session: &Session) -> ClientResult<()> {
        let request = self
            .client
            .request_as(Method::POST, &self.url("logout"), &session.access_token);
        self.client.send_empty(request).await
    }
}
