//! Template suggestions hook

use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_rows};
use shared::models::{TEMPLATE_SUGGESTION_COLUMNS, TemplateSuggestion, tables};

use super::Collection;
use crate::error::AdminResult;
use crate::i18n::Locale;
use crate::session::SessionStore;

/// Suggestions shown on the content screen
pub const SUGGESTION_LIMIT: usize = 10;

/// Best-scoring reusable templates in the active language
#[derive(Clone)]
pub struct TemplateSuggestionsHook {
    store: Arc<dyn RemoteStore>,
    sessions: SessionStore,
    locale: Locale,
    suggestions: Collection<TemplateSuggestion>,
}

impl TemplateSuggestionsHook {
    pub fn new(store: Arc<dyn RemoteStore>, sessions: SessionStore, locale: Locale) -> Self {
        Self {
            store,
            sessions,
            locale,
            suggestions: Collection::new(),
        }
    }

    pub fn collection(&self) -> &Collection<TemplateSuggestion> {
        &self.suggestions
    }

    /// Reload suggestions; without a session nothing is requested
    pub async fn fetch(&self) -> AdminResult<()> {
        if self.sessions.current_user_id().await.is_none() {
            tracing::debug!("No session, skipping template suggestions");
            self.suggestions.clear().await;
            return Ok(());
        }
        let language = self.locale.language();
        let ticket = self.suggestions.begin().await;
        let result = self.load(language.code()).await;
        if let Err(e) = &result {
            tracing::error!(table = tables::GENERATED_CONTENT, language = %language, error = %e, "Error fetching template suggestions");
        }
        self.suggestions.complete(ticket, result).await
    }

    async fn load(&self, language: &str) -> AdminResult<Vec<TemplateSuggestion>> {
        let query = Query::new()
            .select(TEMPLATE_SUGGESTION_COLUMNS)
            .eq("is_template", true)
            .eq("language", language)
            .order("suggestion_score", false)
            .limit(SUGGESTION_LIMIT);
        let rows = self.store.select(tables::GENERATED_CONTENT, &query).await?;
        Ok(decode_rows(rows)?)
    }
}
