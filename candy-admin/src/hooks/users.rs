//! Users hook (read-only)

use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_rows};
use shared::models::{UserProfile, tables};

use super::Collection;
use crate::error::AdminResult;

#[derive(Clone)]
pub struct UsersHook {
    store: Arc<dyn RemoteStore>,
    users: Collection<UserProfile>,
}

impl UsersHook {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            users: Collection::new(),
        }
    }

    pub fn collection(&self) -> &Collection<UserProfile> {
        &self.users
    }

    pub async fn fetch(&self) -> AdminResult<()> {
        let ticket = self.users.begin().await;
        let result = self.load().await;
        if let Err(e) = &result {
            tracing::error!(table = tables::USER_PROFILES, error = %e, "Error fetching users");
        }
        self.users.complete(ticket, result).await
    }

    async fn load(&self) -> AdminResult<Vec<UserProfile>> {
        let rows = self
            .store
            .select(tables::USER_PROFILES, &Query::new().order("full_name", true))
            .await?;
        Ok(decode_rows(rows)?)
    }
}
