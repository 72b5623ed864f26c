use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};

use crate::{ClientError, ClientResult, Query, RemoteStore};

/// Table name -> rows
pub type Tables = HashMap<String, Vec<Value>>;

/// Remote procedure implementation; runs with exclusive access to the tables
pub type RpcHandler = Arc<dyn Fn(&mut Tables, Value) -> ClientResult<Value> + Send + Sync>;

/// Store operation, for call counting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Select,
    Insert,
    Update,
    Delete,
    Rpc,
}

impl StoreOp {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            StoreOp::Select => 0,
            StoreOp::Insert => 1,
            StoreOp::Update => 2,
            StoreOp::Delete => 3,
            StoreOp::Rpc => 4,
        }
    }
}

/// In-memory [`RemoteStore`]
///
/// Inserts get a UUID `id` and a `created_at` timestamp when the row
/// does not carry them. Filters, ordering, limits and column selection
/// follow [`Query`].
pub struct MemoryStore {
    tables: RwLock<Tables>,
    rpc: RwLock<HashMap<String, RpcHandler>>,
    calls: [AtomicUsize; StoreOp::COUNT],
    failures: Mutex<Vec<(StoreOp, String)>>,
    latency_ms: AtomicU64,
    token: RwLock<Option<String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            rpc: RwLock::new(HashMap::new()),
            calls: Default::default(),
            failures: Mutex::new(Vec::new()),
            latency_ms: AtomicU64::new(0),
            token: RwLock::new(None),
        }
    }

    /// Put rows into a table as-is (no id/timestamp assignment, not counted)
    pub async fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    /// Snapshot of a table in insertion order
    pub async fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.read().await.get(table).cloned().unwrap_or_default()
    }

    /// Register a remote procedure
    pub async fn register_rpc<F>(&self, name: &str, handler: F)
    where
        F: Fn(&mut Tables, Value) -> ClientResult<Value> + Send + Sync + 'static,
    {
        self.rpc.write().await.insert(name.to_string(), Arc::new(handler));
    }

    /// Make the next call of `op` fail with `message`
    pub async fn fail_next(&self, op: StoreOp, message: impl Into<String>) {
        self.failures.lock().await.push((op, message.into()));
    }

    /// Delay every call, to exercise overlapping requests
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms.store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn call_count(&self, op: StoreOp) -> usize {
        self.calls[op.index()].load(Ordering::Relaxed)
    }

    /// Token last pushed via [`RemoteStore::set_access_token`]
    pub async fn access_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn enter(&self, op: StoreOp) -> ClientResult<()> {
        self.calls[op.index()].fetch_add(1, Ordering::Relaxed);
        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        let mut failures = self.failures.lock().await;
        if let Some(pos) = failures.iter().position(|(o, _)| *o == op) {
            let (_, message) = failures.remove(pos);
            tracing::debug!(?op, %message, "Injected store failure");
            return Err(ClientError::Api {
                code: "injected".to_string(),
                message,
                details: None,
            });
        }
        Ok(())
    }
}

fn project(row: &Value, columns: Option<&str>) -> Value {
    let columns = match columns.map(str::trim) {
        None | Some("*") | Some("") => return row.clone(),
        Some(c) => c,
    };
    let Some(obj) = row.as_object() else {
        return row.clone();
    };
    let mut out = Map::new();
    for column in columns.split(',').map(str::trim) {
        if let Some(v) = obj.get(column) {
            out.insert(column.to_string(), v.clone());
        }
    }
    Value::Object(out)
}

fn prepare_insert(row: Value) -> ClientResult<Value> {
    let Value::Object(mut obj) = row else {
        return Err(ClientError::Validation("row must be a JSON object".to_string()));
    };
    obj.entry("id")
        .or_insert_with(|| Value::String(uuid::Uuid::new_v4().to_string()));
    obj.entry("created_at")
        .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
    Ok(Value::Object(obj))
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn select(&self, table: &str, query: &Query) -> ClientResult<Vec<Value>> {
        self.enter(StoreOp::Select).await?;
        let tables = self.tables.read().await;
        let mut rows: Vec<&Value> = tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).collect())
            .unwrap_or_default();
        rows.sort_by(|a, b| query.compare_rows(a, b));
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|r| project(r, query.columns.as_deref()))
            .collect())
    }

    async fn insert(&self, table: &str, rows: Vec<Value>) -> ClientResult<Vec<Value>> {
        self.enter(StoreOp::Insert).await?;
        let prepared = rows.into_iter().map(prepare_insert).collect::<ClientResult<Vec<_>>>()?;
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .extend(prepared.iter().cloned());
        Ok(prepared)
    }

    async fn update(&self, table: &str, query: &Query, patch: Value) -> ClientResult<Vec<Value>> {
        self.enter(StoreOp::Update).await?;
        let Value::Object(patch) = patch else {
            return Err(ClientError::Validation("patch must be a JSON object".to_string()));
        };
        let mut tables = self.tables.write().await;
        let mut updated = Vec::new();
        if let Some(rows) = tables.get_mut(table) {
            for row in rows.iter_mut().filter(|r| query.matches(r)) {
                if let Value::Object(obj) = row {
                    for (k, v) in &patch {
                        obj.insert(k.clone(), v.clone());
                    }
                }
                updated.push(row.clone());
            }
        }
        Ok(updated)
    }

    async fn delete(&self, table: &str, query: &Query) -> ClientResult<()> {
        self.enter(StoreOp::Delete).await?;
        if query.filters.is_empty() {
            return Err(ClientError::Validation(format!("refusing unfiltered delete on {}", table)));
        }
        if let Some(rows) = self.tables.write().await.get_mut(table) {
            rows.retain(|r| !query.matches(r));
        }
        Ok(())
    }

    async fn rpc(&self, function: &str, params: Value) -> ClientResult<Value> {
        self.enter(StoreOp::Rpc).await?;
        let handler = self
            .rpc
            .read()
            .await
            .get(function)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("function {}", function)))?;
        let mut tables = self.tables.write().await;
        handler(&mut *tables, params)
    }

    async fn set_access_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let store = MemoryStore::new();
        let rows = store
            .insert("products", vec![json!({ "name": "Taffy" })])
            .await
            .unwrap();
        assert!(rows[0]["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(rows[0]["created_at"].is_string());
        assert_eq!(store.rows("products").await.len(), 1);
    }

    #[tokio::test]
    async fn test_select_order_limit_project() {
        let store = MemoryStore::new();
        store
            .seed(
                "t",
                vec![
                    json!({ "id": "a", "score": 1, "lang": "en" }),
                    json!({ "id": "b", "score": 3, "lang": "en" }),
                    json!({ "id": "c", "score": 2, "lang": "ar" }),
                ],
            )
            .await;
        let q = Query::new().select("id").eq("lang", "en").order("score", false).limit(1);
        let rows = store.select("t", &q).await.unwrap();
        assert_eq!(rows, vec![json!({ "id": "b" })]);
        assert_eq!(store.call_count(StoreOp::Select), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_id() {
        let store = MemoryStore::new();
        store.seed("t", vec![json!({ "id": "a", "n": 1 }), json!({ "id": "b", "n": 2 })]).await;
        let updated = store.update("t", &Query::by_id("a"), json!({ "n": 5 })).await.unwrap();
        assert_eq!(updated, vec![json!({ "id": "a", "n": 5 })]);
        store.delete("t", &Query::by_id("b")).await.unwrap();
        assert_eq!(store.rows("t").await, vec![json!({ "id": "a", "n": 5 })]);
    }

    #[tokio::test]
    async fn test_fail_next_is_one_shot() {
        let store = MemoryStore::new();
        store.fail_next(StoreOp::Select, "boom").await;
        let err = store.select("t", &Query::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { ref message, .. } if message == "boom"));
        assert!(store.select("t", &Query::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rpc_handler() {
        let store = MemoryStore::new();
        store
            .register_rpc("count_rows", |tables, params| {
                let table = params["table"].as_str().unwrap_or_default();
                let n = tables.get(table).map(Vec::len).unwrap_or(0);
                Ok(json!(n))
            })
            .await;
        store.seed("t", vec![json!({ "id": "a" })]).await;
        assert_eq!(store.rpc("count_rows", json!({ "table": "t" })).await.unwrap(), json!(1));
        assert!(matches!(
            store.rpc("missing", Value::Null).await,
            Err(ClientError::NotFound(_))
        ));
    }
}
