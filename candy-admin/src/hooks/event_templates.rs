//! Event calendar hook
//!
//! Upcoming events come from `template_events`; the templates attached
//! to them are `generated_content` rows carrying an `event_id`.

use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_rows};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use shared::models::{EVENT_TEMPLATE_COLUMNS, EventTemplate, TemplateEvent, rpc, tables};

use super::Collection;
use crate::error::AdminResult;
use crate::i18n::Locale;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct EventTemplatesHook {
    store: Arc<dyn RemoteStore>,
    sessions: SessionStore,
    locale: Locale,
    events: Collection<TemplateEvent>,
    templates: Collection<EventTemplate>,
}

impl EventTemplatesHook {
    pub fn new(store: Arc<dyn RemoteStore>, sessions: SessionStore, locale: Locale) -> Self {
        Self {
            store,
            sessions,
            locale,
            events: Collection::new(),
            templates: Collection::new(),
        }
    }

    pub fn events(&self) -> &Collection<TemplateEvent> {
        &self.events
    }

    pub fn templates(&self) -> &Collection<EventTemplate> {
        &self.templates
    }

    /// Events that have not ended by `now`, soonest first
    pub async fn fetch_upcoming_events(&self, now: DateTime<Utc>) -> AdminResult<()> {
        if self.sessions.current_user_id().await.is_none() {
            self.events.clear().await;
            return Ok(());
        }
        let ticket = self.events.begin().await;
        let query = Query::new()
            .gte("end_date", now.to_rfc3339())
            .order("start_date", true);
        let result: AdminResult<Vec<TemplateEvent>> = match self.store.select(tables::TEMPLATE_EVENTS, &query).await {
            Ok(rows) => decode_rows(rows).map_err(Into::into),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::error!(table = tables::TEMPLATE_EVENTS, error = %e, "Error fetching upcoming events");
        }
        self.events.complete(ticket, result).await
    }

    /// Templates for the currently loaded events in the active language
    pub async fn fetch_event_templates(&self) -> AdminResult<()> {
        let event_ids: Vec<String> = self.events.items().await.into_iter().map(|e| e.id).collect();
        if event_ids.is_empty() {
            self.templates.clear().await;
            return Ok(());
        }
        let language = self.locale.language();
        let ticket = self.templates.begin().await;
        let query = Query::new()
            .select(EVENT_TEMPLATE_COLUMNS)
            .in_list("event_id", event_ids)
            .eq("language", language.code())
            .order("suggestion_score", false);
        let result: AdminResult<Vec<EventTemplate>> = match self.store.select(tables::GENERATED_CONTENT, &query).await {
            Ok(rows) => decode_rows(rows).map_err(Into::into),
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::error!(table = tables::GENERATED_CONTENT, language = %language, error = %e, "Error fetching event templates");
        }
        self.templates.complete(ticket, result).await
    }

    /// Reload events, then their templates
    pub async fn refetch(&self, now: DateTime<Utc>) -> AdminResult<()> {
        self.fetch_upcoming_events(now).await?;
        self.fetch_event_templates().await
    }

    /// Copy a template onto another event server-side
    ///
    /// `context` fills `{{key}}` placeholders in the cloned content.
    pub async fn clone_template_for_event(
        &self,
        template_id: &str,
        event_id: &str,
        context: Map<String, Value>,
    ) -> AdminResult<EventTemplate> {
        let params = json!({
            "template_id": template_id,
            "event_id": event_id,
            "new_context": context,
        });
        match self.store.rpc(rpc::CLONE_TEMPLATE_FOR_EVENT, params).await {
            Ok(value) => {
                let cloned: EventTemplate = serde_json::from_value(value)?;
                tracing::info!(template_id = %template_id, event_id = %event_id, clone_id = %cloned.id, "Template cloned");
                Ok(cloned)
            }
            Err(e) => {
                tracing::error!(template_id = %template_id, event_id = %event_id, error = %e, "Error cloning template");
                Err(e.into())
            }
        }
    }
}
