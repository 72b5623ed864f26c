//! Content history hook

use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_rows};
use shared::models::{GeneratedContent, tables};

use super::Collection;
use crate::error::AdminResult;
use crate::session::SessionStore;

/// Generated content of the signed-in user, newest first
#[derive(Clone)]
pub struct ContentHistoryHook {
    store: Arc<dyn RemoteStore>,
    sessions: SessionStore,
    history: Collection<GeneratedContent>,
}

impl ContentHistoryHook {
    pub fn new(store: Arc<dyn RemoteStore>, sessions: SessionStore) -> Self {
        Self {
            store,
            sessions,
            history: Collection::new(),
        }
    }

    pub fn collection(&self) -> &Collection<GeneratedContent> {
        &self.history
    }

    pub async fn fetch(&self) -> AdminResult<()> {
        let Some(user_id) = self.sessions.current_user_id().await else {
            self.history.clear().await;
            return Ok(());
        };
        let ticket = self.history.begin().await;
        let result = self.load(&user_id).await;
        if let Err(e) = &result {
            tracing::error!(table = tables::GENERATED_CONTENT, user_id = %user_id, error = %e, "Error fetching content history");
        }
        self.history.complete(ticket, result).await
    }

    /// Delete one row by id
    pub async fn delete(&self, id: &str) -> AdminResult<()> {
        let user_id = self.sessions.require_user_id().await?;
        self.history.start_mutation().await;
        let query = Query::by_id(id).eq("user_id", user_id);
        let result: AdminResult<()> = self
            .store
            .delete(tables::GENERATED_CONTENT, &query)
            .await
            .map_err(Into::into);
        if let Err(e) = &result {
            tracing::error!(table = tables::GENERATED_CONTENT, id = %id, error = %e, "Error deleting content");
        }
        self.history
            .finish_mutation(result, |rows, _| rows.retain(|c| c.id != id))
            .await
    }

    async fn load(&self, user_id: &str) -> AdminResult<Vec<GeneratedContent>> {
        let query = Query::new().eq("user_id", user_id).order("created_at", false);
        let rows = self.store.select(tables::GENERATED_CONTENT, &query).await?;
        Ok(decode_rows(rows)?)
    }
}
