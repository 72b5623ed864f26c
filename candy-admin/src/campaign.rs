//! Campaign builder
//!
//! Four steps in a fixed order. Any step can be selected directly;
//! `next` only advances past a step whose fields are complete, and
//! `finish` requires every step to validate.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{ContentType, TemplateEvent};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStep {
    Event,
    Audience,
    Content,
    Schedule,
}

impl CampaignStep {
    pub const ALL: [CampaignStep; 4] = [
        CampaignStep::Event,
        CampaignStep::Audience,
        CampaignStep::Content,
        CampaignStep::Schedule,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            CampaignStep::Event => "contentAI.campaign.selectEvent",
            CampaignStep::Audience => "contentAI.campaign.defineAudience",
            CampaignStep::Content => "contentAI.campaign.createContent",
            CampaignStep::Schedule => "contentAI.campaign.schedule",
        }
    }

    fn next(&self) -> Option<CampaignStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn prev(&self) -> Option<CampaignStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for CampaignStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CampaignStep::Event => "event",
            CampaignStep::Audience => "audience",
            CampaignStep::Content => "content",
            CampaignStep::Schedule => "schedule",
        };
        f.write_str(name)
    }
}

/// Raw form text for every step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub event_name: String,
    pub start_date: String,
    pub end_date: String,
    pub event_id: Option<String>,
    pub regions: Vec<String>,
    pub audience_description: String,
    pub content_type: ContentType,
    pub message: String,
    pub send_date: String,
    pub channels: Vec<String>,
}

/// Completed campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignDraft {
    pub event_name: String,
    pub event_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub regions: Vec<String>,
    pub audience_description: String,
    pub content_type: ContentType,
    pub message: String,
    pub send_date: NaiveDate,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CampaignBuilder {
    step: CampaignStep,
    pub form: CampaignForm,
}

impl Default for CampaignBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignBuilder {
    pub fn new() -> Self {
        Self {
            step: CampaignStep::Event,
            form: CampaignForm::default(),
        }
    }

    pub fn step(&self) -> CampaignStep {
        self.step
    }

    /// Jump to any step (tab press)
    pub fn select(&mut self, step: CampaignStep) {
        self.step = step;
    }

    /// Advance after validating the current step
    pub fn next(&mut self) -> AppResult<CampaignStep> {
        self.validate_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Returns false on the first step
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Fill the event step from a calendar entry
    pub fn prefill_from_event(&mut self, event: &TemplateEvent) {
        self.form.event_name = event.name.clone();
        self.form.event_id = Some(event.id.clone());
        self.form.start_date = event.start_date.date_naive().to_string();
        self.form.end_date = event.end_date.date_naive().to_string();
        if self.form.regions.is_empty() {
            self.form.regions = event.regions.clone();
        }
    }

    pub fn is_step_complete(&self, step: CampaignStep) -> bool {
        self.validate_step(step).is_ok()
    }

    pub fn validate_step(&self, step: CampaignStep) -> AppResult<()> {
        let form = &self.form;
        match step {
            CampaignStep::Event => {
                required(step, "event_name", &form.event_name)?;
                let (start, end) = self.event_range()?;
                if end < start {
                    return Err(incomplete(step, "end_date").with_detail("reason", "end before start"));
                }
            }
            CampaignStep::Audience => {
                if form.regions.iter().all(|r| r.trim().is_empty()) {
                    return Err(incomplete(step, "regions"));
                }
                required(step, "audience_description", &form.audience_description)?;
            }
            CampaignStep::Content => required(step, "message", &form.message)?,
            CampaignStep::Schedule => {
                let send = parse_date(step, "send_date", &form.send_date)?;
                if let Ok((_, end)) = self.event_range()
                    && send > end
                {
                    return Err(incomplete(step, "send_date").with_detail("reason", "after event end"));
                }
                if form.channels.iter().all(|c| c.trim().is_empty()) {
                    return Err(incomplete(step, "channels"));
                }
            }
        }
        Ok(())
    }

    /// Build the draft once every step validates
    pub fn finish(&self) -> AppResult<CampaignDraft> {
        for step in CampaignStep::ALL {
            self.validate_step(step)?;
        }
        let (start_date, end_date) = self.event_range()?;
        let form = &self.form;
        let draft = CampaignDraft {
            event_name: form.event_name.trim().to_string(),
            event_id: form.event_id.clone(),
            start_date,
            end_date,
            regions: clean(&form.regions),
            audience_description: form.audience_description.trim().to_string(),
            content_type: form.content_type,
            message: form.message.trim().to_string(),
            send_date: parse_date(CampaignStep::Schedule, "send_date", &form.send_date)?,
            channels: clean(&form.channels),
        };
        tracing::info!(event = %draft.event_name, send_date = %draft.send_date, "Campaign ready");
        Ok(draft)
    }

    fn event_range(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let step = CampaignStep::Event;
        Ok((
            parse_date(step, "start_date", &self.form.start_date)?,
            parse_date(step, "end_date", &self.form.end_date)?,
        ))
    }
}

fn incomplete(step: CampaignStep, field: &str) -> AppError {
    AppError::new(ErrorCode::CampaignStepIncomplete)
        .with_detail("step", step.to_string())
        .with_detail("field", field)
}

fn required(step: CampaignStep, field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(incomplete(step, field));
    }
    Ok(())
}

fn parse_date(step: CampaignStep, field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| incomplete(step, field))
}

fn clean(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CampaignBuilder {
        let mut b = CampaignBuilder::new();
        b.form.event_name = "Ramadan".into();
        b.form.start_date = "2026-02-18".into();
        b.form.end_date = "2026-03-19".into();
        b.form.regions = vec!["SA".into(), " ".into(), "AE".into()];
        b.form.audience_description = "Families".into();
        b.form.message = "Sweet nights".into();
        b.form.send_date = "2026-02-15".into();
        b.form.channels = vec!["whatsapp".into()];
        b
    }

    fn field(err: &AppError) -> Option<String> {
        err.details
            .as_ref()
            .and_then(|d| d.get("field"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    #[test]
    fn test_next_blocks_incomplete_step() {
        let mut b = CampaignBuilder::new();
        let err = b.next().unwrap_err();
        assert_eq!(err.code, ErrorCode::CampaignStepIncomplete);
        assert_eq!(field(&err).as_deref(), Some("event_name"));
        assert_eq!(b.step(), CampaignStep::Event);
    }

    #[test]
    fn test_walk_all_steps() {
        let mut b = filled();
        assert_eq!(b.next().unwrap(), CampaignStep::Audience);
        assert_eq!(b.next().unwrap(), CampaignStep::Content);
        assert_eq!(b.next().unwrap(), CampaignStep::Schedule);
        assert_eq!(b.next().unwrap(), CampaignStep::Schedule);
        assert!(b.back());
        assert_eq!(b.step(), CampaignStep::Content);
    }

    #[test]
    fn test_select_jumps_anywhere() {
        let mut b = CampaignBuilder::new();
        b.select(CampaignStep::Schedule);
        assert_eq!(b.step(), CampaignStep::Schedule);
        b.select(CampaignStep::Event);
        assert!(!b.back());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut b = filled();
        b.form.end_date = "2026-02-01".into();
        let err = b.validate_step(CampaignStep::Event).unwrap_err();
        assert_eq!(field(&err).as_deref(), Some("end_date"));
    }

    #[test]
    fn test_send_after_end_rejected() {
        let mut b = filled();
        b.form.send_date = "2026-04-01".into();
        assert!(!b.is_step_complete(CampaignStep::Schedule));
    }

    #[test]
    fn test_finish_cleans_lists() {
        let draft = filled().finish().unwrap();
        assert_eq!(draft.regions, vec!["SA".to_string(), "AE".to_string()]);
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2026, 2, 18).unwrap());
        assert_eq!(draft.content_type, ContentType::Social);
    }

    #[test]
    fn test_finish_requires_every_step() {
        let mut b = filled();
        b.form.channels.clear();
        assert!(b.finish().is_err());
    }
}
