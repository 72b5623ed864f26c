//! Content generation workflow
//!
//! `Idle -> Generating -> Generated -> Publishing -> Published`. Rating,
//! saving as a template and copying happen while `Generated` (or later)
//! and do not change the phase. Every write is keyed by the id of the
//! row captured at generation time.

use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_row, decode_rows, encode_row};
use chrono::{DateTime, Duration, Utc};
use shared::models::{
    ContentRating, ContentType, GeneratedContent, GeneratedContentCreate, GeneratedContentUpdate, ContentStatus,
    TemplateSuggestion, tables,
};
use shared::{AppError, ErrorCode};

use super::{Clipboard, ContentProvider};
use crate::error::AdminResult;
use crate::hooks::ContentHistoryHook;
use crate::i18n::Locale;
use crate::session::SessionStore;

/// How long the "copied" indicator stays on
pub const COPIED_INDICATOR_MS: i64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Generated,
    Publishing,
    Published,
}

pub struct ContentWorkflow {
    store: Arc<dyn RemoteStore>,
    provider: Arc<dyn ContentProvider>,
    sessions: SessionStore,
    locale: Locale,
    history: ContentHistoryHook,
    prompt: String,
    content_type: ContentType,
    phase: Phase,
    current: Option<GeneratedContent>,
    copied_at: Option<DateTime<Utc>>,
    error: Option<String>,
}

impl ContentWorkflow {
    pub fn new(
        store: Arc<dyn RemoteStore>,
        provider: Arc<dyn ContentProvider>,
        sessions: SessionStore,
        locale: Locale,
        history: ContentHistoryHook,
    ) -> Self {
        Self {
            store,
            provider,
            sessions,
            locale,
            history,
            prompt: String::new(),
            content_type: ContentType::default(),
            phase: Phase::Idle,
            current: None,
            copied_at: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Row produced by the last generation
    pub fn current(&self) -> Option<&GeneratedContent> {
        self.current.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &ContentHistoryHook {
        &self.history
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    /// Start from a suggested template
    pub fn apply_template(&mut self, template: &TemplateSuggestion) {
        self.prompt = template.content.clone();
        self.content_type = template.content_type.unwrap_or_default();
    }

    /// Generate a text for the prompt and store it as a draft
    pub async fn generate(&mut self) -> AdminResult<&GeneratedContent> {
        if self.prompt.trim().is_empty() {
            return Err(AppError::new(ErrorCode::ContentPromptEmpty).into());
        }
        let user_id = self.sessions.require_user_id().await?;

        let previous = self.phase;
        self.phase = Phase::Generating;
        self.error = None;
        self.copied_at = None;

        match self.create_draft(&user_id).await {
            Ok(row) => {
                tracing::info!(id = %row.id, content_type = %row.content_type, "Content generated");
                self.current = Some(row);
                self.phase = Phase::Generated;
                self.refresh_history().await;
                self.current
                    .as_ref()
                    .ok_or_else(|| AppError::new(ErrorCode::ContentNotGenerated).into())
            }
            Err(e) => {
                tracing::error!(table = tables::GENERATED_CONTENT, error = %e, "Error generating content");
                self.phase = previous;
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn rate(&mut self, rating: ContentRating) -> AdminResult<()> {
        let id = self.current_id()?;
        let row = self.write(&id, GeneratedContentUpdate::rating(rating)).await?;
        tracing::info!(id = %id, rating = rating.as_str(), "Content rated");
        self.current = Some(row);
        Ok(())
    }

    /// Only content rated useful and not yet saved can become a template
    pub fn can_save_template(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|c| c.rating == Some(ContentRating::Useful) && !c.is_template)
    }

    /// Mark the current row as a reusable template named after the prompt
    pub async fn save_template(&mut self) -> AdminResult<()> {
        let id = self.current_id()?;
        if !self.can_save_template() {
            return Err(AppError::new(ErrorCode::ContentNotRatedUseful).into());
        }
        let name = match self.prompt.trim() {
            "" => self.current.as_ref().map(|c| c.prompt.clone()).unwrap_or_default(),
            prompt => prompt.to_string(),
        };
        let update = GeneratedContentUpdate::save_as_template(name, self.locale.language().code());
        let row = self.write(&id, update).await?;
        tracing::info!(id = %id, "Content saved as template");
        self.current = Some(row);
        Ok(())
    }

    /// Publish the current row; publishing again is a no-op
    pub async fn publish(&mut self, now: DateTime<Utc>) -> AdminResult<()> {
        let id = self.current_id()?;
        if self.current.as_ref().is_some_and(GeneratedContent::is_published) {
            self.phase = Phase::Published;
            return Ok(());
        }
        self.phase = Phase::Publishing;
        match self.write(&id, GeneratedContentUpdate::publish(now)).await {
            Ok(row) => {
                tracing::info!(id = %id, "Content published");
                self.current = Some(row);
                self.phase = Phase::Published;
                self.refresh_history().await;
                Ok(())
            }
            Err(e) => {
                self.phase = Phase::Generated;
                Err(e)
            }
        }
    }

    /// Copy the current text and light the indicator
    pub fn copy(&mut self, clipboard: &dyn Clipboard, now: DateTime<Utc>) -> AdminResult<()> {
        let text = self
            .current
            .as_ref()
            .map(|c| c.content.as_str())
            .ok_or_else(|| AppError::new(ErrorCode::ContentNotGenerated))?;
        if let Err(e) = clipboard.write_text(text) {
            tracing::error!(error = %e, "Error copying content");
            self.error = Some(e.user_message());
            return Err(e);
        }
        self.copied_at = Some(now);
        Ok(())
    }

    pub fn is_copied(&self, now: DateTime<Utc>) -> bool {
        self.copied_at
            .is_some_and(|at| now >= at && now - at < Duration::milliseconds(COPIED_INDICATOR_MS))
    }

    /// Delete a history row; deleting the current row resets the workflow
    pub async fn delete_history(&mut self, id: &str) -> AdminResult<()> {
        self.history.delete(id).await?;
        if self.current.as_ref().is_some_and(|c| c.id == id) {
            self.current = None;
            self.phase = Phase::Idle;
            self.copied_at = None;
        }
        Ok(())
    }

    /// Pick up an earlier row of the signed-in user as the current one
    pub async fn resume(&mut self, id: &str) -> AdminResult<&GeneratedContent> {
        let user_id = self.sessions.require_user_id().await?;
        let rows = self
            .store
            .select(tables::GENERATED_CONTENT, &Query::by_id(id).eq("user_id", user_id))
            .await?;
        let row: GeneratedContent = decode_rows(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::new(ErrorCode::ContentNotFound).with_detail("id", id))?;
        self.prompt = row.prompt.clone();
        self.content_type = row.content_type;
        self.phase = match row.status {
            ContentStatus::Draft => Phase::Generated,
            ContentStatus::Published => Phase::Published,
        };
        Ok(self.current.insert(row))
    }

    fn current_id(&self) -> AdminResult<String> {
        self.current
            .as_ref()
            .map(|c| c.id.clone())
            .ok_or_else(|| AppError::new(ErrorCode::ContentNotGenerated).into())
    }

    async fn create_draft(&self, user_id: &str) -> AdminResult<GeneratedContent> {
        let text = self.provider.generate(&self.prompt, self.content_type).await?;
        let create = GeneratedContentCreate {
            user_id: user_id.to_string(),
            prompt: self.prompt.trim().to_string(),
            content: text,
            content_type: self.content_type,
            status: ContentStatus::Draft,
            language: self.locale.language().code().to_string(),
        };
        let rows = self
            .store
            .insert(tables::GENERATED_CONTENT, vec![encode_row(&create)?])
            .await?;
        Ok(decode_row(rows)?)
    }

    /// Patch one row of the signed-in user by id
    async fn write(&mut self, id: &str, update: GeneratedContentUpdate) -> AdminResult<GeneratedContent> {
        let result = self.try_write(id, &update).await;
        match &result {
            Ok(_) => self.error = None,
            Err(e) => {
                tracing::error!(table = tables::GENERATED_CONTENT, id = %id, error = %e, "Error updating content");
                self.error = Some(e.user_message());
            }
        }
        result
    }

    async fn try_write(&self, id: &str, update: &GeneratedContentUpdate) -> AdminResult<GeneratedContent> {
        let user_id = self.sessions.require_user_id().await?;
        let query = Query::by_id(id).eq("user_id", user_id);
        let rows = self
            .store
            .update(tables::GENERATED_CONTENT, &query, encode_row(update)?)
            .await?;
        if rows.is_empty() {
            return Err(AppError::new(ErrorCode::ContentNotFound).with_detail("id", id).into());
        }
        Ok(decode_row(rows)?)
    }

    async fn refresh_history(&self) {
        if let Err(e) = self.history.fetch().await
            && !e.is_superseded()
        {
            tracing::warn!(error = %e, "History refresh failed");
        }
    }
}
