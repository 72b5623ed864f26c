//! HTTP client for the hosted backend
//!
//! Every request carries the project `apikey` header and a bearer token:
//! the signed-in user's access token when one is set, the anon key
//! otherwise.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body returned by the REST and auth endpoints
///
/// PostgREST uses `code`/`message`/`details`/`hint`; the auth service
/// uses `error`/`error_description` or `msg`.
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    details: Option<serde_json::Value>,
    #[serde(default)]
    hint: Option<String>,
}

impl ApiErrorResponse {
    fn message(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error_description.clone())
            .or_else(|| self.msg.clone())
            .or_else(|| self.error.clone())
    }

    fn code(&self, status: StatusCode) -> String {
        match &self.code {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => self.error.clone().unwrap_or_else(|| status.as_u16().to_string()),
        }
    }
}

/// Shared HTTP plumbing for the REST store and the identity provider
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    config: ClientConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the user access token (None reverts to the anon key)
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Start a request with the `apikey` and bearer headers set
    pub async fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let bearer = self
            .token
            .read()
            .await
            .clone()
            .unwrap_or_else(|| self.config.api_key.clone());
        self.request_as(method, url, &bearer)
    }

    /// Start a request authorized with an explicit bearer token
    pub fn request_as(&self, method: Method, url: &str, bearer: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", bearer))
    }

    /// Send and decode a JSON response body
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Send and discard the response body
    pub async fn send_empty(&self, request: RequestBuilder) -> ClientResult<()> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::map_error(status, &text));
        }
        Ok(())
    }

    /// POST a JSON body, decode the JSON response
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ClientResult<T> {
        let request = self.request(Method::POST, url).await.json(body);
        self.send_json(request).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Self::map_error(status, &text));
        }
        // No Content: decode as JSON null so `()`/Option targets still work
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(format!("{}: {}", e, truncate(body))))
    }

    fn map_error(status: StatusCode, text: &str) -> ClientError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(text)
            && let Some(message) = api_err.message()
        {
            let message = match &api_err.hint {
                Some(hint) => format!("{} ({})", message, hint),
                None => message,
            };
            if status == StatusCode::BAD_REQUEST && api_err.error.as_deref() == Some("invalid_grant") {
                return ClientError::Auth(message);
            }
            return ClientError::Api {
                code: api_err.code(status),
                message,
                details: api_err.details,
            };
        }
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(text.to_string()),
            StatusCode::FORBIDDEN => ClientError::Forbidden(text.to_string()),
            StatusCode::NOT_FOUND => ClientError::NotFound(text.to_string()),
            StatusCode::BAD_REQUEST => ClientError::Validation(text.to_string()),
            _ => ClientError::Internal(format!("{}: {}", status, text)),
        }
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_postgrest_error() {
        let body = r#"{"code":"23505","message":"duplicate key value","details":"Key (id) exists","hint":null}"#;
        match RestClient::map_error(StatusCode::CONFLICT, body) {
            ClientError::Api { code, message, details } => {
                assert_eq!(code, "23505");
                assert_eq!(message, "duplicate key value");
                assert!(details.is_some());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_map_auth_error() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let err = RestClient::map_error(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ClientError::Auth(ref m) if m == "Invalid login credentials"));
    }

    #[test]
    fn test_map_plain_status() {
        assert!(matches!(
            RestClient::map_error(StatusCode::NOT_FOUND, "nope"),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            RestClient::map_error(StatusCode::UNAUTHORIZED, ""),
            ClientError::Unauthorized(_)
        ));
    }

    #[tokio::test]
    async fn test_token_falls_back_to_anon_key() {
        let client = RestClient::new(&ClientConfig::new("http://localhost:1", "anon")).unwrap();
        assert!(client.token().await.is_none());
        client.set_token(Some("user-token".into())).await;
        assert_eq!(client.token().await.as_deref(), Some("user-token"));
        let request = client.request(Method::GET, "http://localhost:1/x").await.build().unwrap();
        assert_eq!(request.headers()["apikey"], "anon");
        assert_eq!(request.headers()["authorization"], "Bearer user-token");
    }
}
