//! Template projections of `generated_content`
//!
//! Reusable templates are generated content rows flagged `is_template`.
//! These structs mirror the column subsets selected for the suggestion
//! strip and the per-event template list.

use serde::{Deserialize, Serialize};

use super::content::ContentType;

/// Column list selected for template suggestions
pub const TEMPLATE_SUGGESTION_COLUMNS: &str = "id,template_name,content,type,template_category,suggestion_score,usage_count,average_rating,language,region";

/// Column list selected for event templates
pub const EVENT_TEMPLATE_COLUMNS: &str =
    "id,template_name,content,event_id,event_performance,suggestion_score";

/// Template suggested on the content screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSuggestion {
    pub id: String,
    #[serde(default)]
    pub template_name: Option<String>,
    pub content: String,
    #[serde(rename = "type", default)]
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub template_category: Option<String>,
    #[serde(default)]
    pub suggestion_score: f64,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl TemplateSuggestion {
    /// Display name, falling back to the first line of the content
    pub fn display_name(&self) -> &str {
        match self.template_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.content.lines().next().unwrap_or_default(),
        }
    }
}

/// Aggregate campaign results recorded against a template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPerformance {
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub engagement: u64,
    #[serde(default)]
    pub conversions: u64,
    #[serde(default)]
    pub revenue: f64,
}

impl EventPerformance {
    /// Conversions per impression in percent (0 when never shown)
    pub fn conversion_rate(&self) -> f64 {
        if self.impressions == 0 {
            return 0.0;
        }
        self.conversions as f64 * 100.0 / self.impressions as f64
    }
}

/// Template attached to a calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub id: String,
    #[serde(default)]
    pub template_name: Option<String>,
    pub content: String,
    pub event_id: String,
    #[serde(default)]
    pub event_performance: EventPerformance,
    #[serde(default)]
    pub suggestion_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let mut s = TemplateSuggestion {
            id: "t1".into(),
            template_name: Some("  ".into()),
            content: "Summer sale\nBuy 2 get 1".into(),
            content_type: None,
            template_category: None,
            suggestion_score: 0.0,
            usage_count: 0,
            average_rating: 0.0,
            language: Some("en".into()),
            region: None,
        };
        assert_eq!(s.display_name(), "Summer sale");
        s.template_name = Some("Summer".into());
        assert_eq!(s.display_name(), "Summer");
    }

    #[test]
    fn test_conversion_rate() {
        let perf = EventPerformance {
            impressions: 200,
            engagement: 40,
            conversions: 5,
            revenue: 120.0,
        };
        assert!((perf.conversion_rate() - 2.5).abs() < f64::EPSILON);
        assert_eq!(EventPerformance::default().conversion_rate(), 0.0);
    }

    #[test]
    fn test_event_template_defaults() {
        let row = serde_json::json!({ "id": "t", "content": "c", "event_id": "e" });
        let t: EventTemplate = serde_json::from_value(row).unwrap();
        assert_eq!(t.event_performance, EventPerformance::default());
    }
}
