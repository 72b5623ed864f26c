//! Data hooks
//!
//! Each hook owns a [`Collection`] of rows fetched from one remote table
//! and exposes the fetch/mutate operations for it. Fetch failures land
//! in the collection's error slot; there are no retries, callers refetch.
//!
//! Every fetch takes a [`Ticket`] before its request and hands it back
//! with the response. Only the latest ticket may write the rows, so a
//! slow response can never overwrite data from a newer request.

mod content_history;
mod event_templates;
mod orders;
mod products;
mod template_suggestions;
mod users;

pub use content_history::ContentHistoryHook;
pub use event_templates::EventTemplatesHook;
pub use orders::OrdersHook;
pub use products::ProductsHook;
pub use template_suggestions::TemplateSuggestionsHook;
pub use users::UsersHook;

use std::sync::Arc;

use shared::{AppError, ErrorCode};
use tokio::sync::RwLock;

use crate::error::AdminResult;

/// Request generation handed out by [`Collection::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Snapshot of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
struct Slot<T> {
    items: Vec<T>,
    is_loading: bool,
    error: Option<String>,
    generation: u64,
    // A fetch holding the latest ticket has not completed yet
    fetching: bool,
}

/// Shared rows + loading flag + error slot
#[derive(Debug)]
pub struct Collection<T> {
    slot: Arc<RwLock<Slot<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot {
                items: Vec::new(),
                is_loading: false,
                error: None,
                generation: 0,
                fetching: false,
            })),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub async fn snapshot(&self) -> CollectionState<T> {
        let slot = self.slot.read().await;
        CollectionState {
            items: slot.items.clone(),
            is_loading: slot.is_loading,
            error: slot.error.clone(),
        }
    }

    pub async fn items(&self) -> Vec<T> {
        self.slot.read().await.items.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.slot.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.slot.read().await.is_loading
    }

    /// Start a fetch: set loading, clear the error, issue a new ticket
    pub async fn begin(&self) -> Ticket {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.is_loading = true;
        slot.fetching = true;
        slot.error = None;
        Ticket(slot.generation)
    }

    /// Finish a fetch
    ///
    /// A superseded ticket leaves the collection untouched and yields
    /// [`ErrorCode::RequestSuperseded`]. Otherwise the rows are replaced
    /// on success, or the error slot is set on failure.
    pub async fn complete(&self, ticket: Ticket, result: AdminResult<Vec<T>>) -> AdminResult<()> {
        let mut slot = self.slot.write().await;
        if slot.generation != ticket.0 {
            tracing::debug!(ticket = ticket.0, latest = slot.generation, "Discarding stale response");
            return Err(AppError::new(ErrorCode::RequestSuperseded).into());
        }
        slot.is_loading = false;
        slot.fetching = false;
        match result {
            Ok(items) => {
                slot.items = items;
                Ok(())
            }
            Err(e) => {
                slot.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Mark a mutation in flight
    pub async fn start_mutation(&self) {
        let mut slot = self.slot.write().await;
        slot.is_loading = true;
        slot.error = None;
    }

    /// Finish a mutation, splicing the result into the rows on success
    ///
    /// A successful splice also supersedes any fetch still in flight.
    /// A failed one leaves the rows alone, and the collection keeps
    /// loading while a fetch is still outstanding.
    pub async fn finish_mutation<R>(
        &self,
        result: AdminResult<R>,
        apply: impl FnOnce(&mut Vec<T>, &R),
    ) -> AdminResult<R> {
        let mut slot = self.slot.write().await;
        match result {
            Ok(value) => {
                apply(&mut slot.items, &value);
                slot.generation += 1;
                slot.fetching = false;
                slot.is_loading = false;
                Ok(value)
            }
            Err(e) => {
                slot.is_loading = slot.fetching;
                slot.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Drop all rows without a request (e.g. after sign-out)
    pub async fn clear(&self) {
        let mut slot = self.slot.write().await;
        slot.generation += 1;
        slot.items.clear();
        slot.is_loading = false;
        slot.fetching = false;
        slot.error = None;
    }
}
