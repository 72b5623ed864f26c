//! Template Event Model
//!
//! Read-only reference data driving the event calendar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::days_until;

/// Kind of calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Cultural,
    Seasonal,
    Holiday,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Cultural => "cultural",
            EventType::Seasonal => "seasonal",
            EventType::Holiday => "holiday",
        }
    }
}

/// Calendar event (`template_events` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEvent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    /// Always >= `start_date`
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl TemplateEvent {
    /// Whole days until the event starts, rounded up (negative once started)
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        days_until(self.start_date, now)
    }

    /// Event has not ended yet
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.end_date >= now
    }

    /// Event is currently running
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    pub fn has_valid_range(&self) -> bool {
        self.end_date >= self.start_date
    }
}
