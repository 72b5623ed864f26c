//! Remote store access
//!
//! [`RemoteStore`] is the table/RPC surface the admin application talks
//! to. [`RestStore`] maps it onto the PostgREST endpoints of the hosted
//! backend; [`crate::MemoryStore`] keeps everything in process.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, ClientResult, Query, RestClient};

/// Table and RPC operations of the backend
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Rows of `table` matching `query`
    async fn select(&self, table: &str, query: &Query) -> ClientResult<Vec<Value>>;

    /// Insert rows, returning them as stored (with `id`/`created_at`)
    async fn insert(&self, table: &str, rows: Vec<Value>) -> ClientResult<Vec<Value>>;

    /// Patch every row matching `query`, returning the updated rows
    async fn update(&self, table: &str, query: &Query, patch: Value) -> ClientResult<Vec<Value>>;

    /// Delete every row matching `query`
    async fn delete(&self, table: &str, query: &Query) -> ClientResult<()>;

    /// Call a remote procedure
    async fn rpc(&self, function: &str, params: Value) -> ClientResult<Value>;

    /// Use the signed-in user's token for subsequent calls
    async fn set_access_token(&self, token: Option<String>);
}

/// PostgREST-backed store
#[derive(Debug, Clone)]
pub struct RestStore {
    client: RestClient,
}

impl RestStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.client.config().rest_url(), table)
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn select(&self, table: &str, query: &Query) -> ClientResult<Vec<Value>> {
        let mut pairs = query.to_pairs();
        if query.columns.is_none() {
            pairs.insert(0, ("select".to_string(), "*".to_string()));
        }
        let request = self
            .client
            .request(Method::GET, &self.table_url(table))
            .await
            .query(&pairs);
        self.client.send_json(request).await
    }

    async fn insert(&self, table: &str, rows: Vec<Value>) -> ClientResult<Vec<Value>> {
        let request = self
            .client
            .request(Method::POST, &self.table_url(table))
            .await
            .header("Prefer", "return=representation")
            .json(&rows);
        self.client.send_json(request).await
    }

    async fn update(&self, table: &str, query: &Query, patch: Value) -> ClientResult<Vec<Value>> {
        if query.filters.is_empty() {
            return Err(ClientError::Validation(format!("refusing unfiltered update on {}", table)));
        }
        let request = self
            .client
            .request(Method::PATCH, &self.table_url(table))
            .await
            .header("Prefer", "return=representation")
            .query(&query.to_pairs())
            .json(&patch);
        self.client.send_json(request).await
    }

    async fn delete(&self, table: &str, query: &Query) -> ClientResult<()> {
        if query.filters.is_empty() {
            return Err(ClientError::Validation(format!("refusing unfiltered delete on {}", table)));
        }
        let request = self
            .client
            .request(Method::DELETE, &self.table_url(table))
            .await
            .query(&query.to_pairs());
        self.client.send_empty(request).await
    }

    async fn rpc(&self, function: &str, params: Value) -> ClientResult<Value> {
        let url = format!("{}/rpc/{}", self.client.config().rest_url(), function);
        self.client.post(&url, &params).await
    }

    async fn set_access_token(&self, token: Option<String>) {
        self.client.set_token(token).await;
    }
}

/// Decode a list of rows
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> ClientResult<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(ClientError::from))
        .collect()
}

/// Decode the first row of a write result
pub fn decode_row<T: DeserializeOwned>(rows: Vec<Value>) -> ClientResult<T> {
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::InvalidResponse("no row returned".to_string()))?;
    Ok(serde_json::from_value(row)?)
}

/// Encode a payload as a JSON row
pub fn encode_row<T: Serialize>(value: &T) -> ClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}
