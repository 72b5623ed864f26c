//! Generated Content Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Marketing channel a piece of content is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Social,
    Whatsapp,
    Email,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Social, ContentType::Whatsapp, ContentType::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Social => "social",
            ContentType::Whatsapp => "whatsapp",
            ContentType::Email => "email",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::validation(format!("Invalid content type: {}", s)))
    }
}

/// Publication status; only `Draft -> Published` is allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
}

/// User feedback on a generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentRating {
    Useful,
    NotRelevant,
}

impl ContentRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::Useful => "useful",
            ContentRating::NotRelevant => "not_relevant",
        }
    }
}

impl FromStr for ContentRating {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "useful" => Ok(ContentRating::Useful),
            "not_relevant" => Ok(ContentRating::NotRelevant),
            other => Err(AppError::validation(format!("Invalid rating: {}", other))),
        }
    }
}

/// Generated content row (`generated_content` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub id: String,
    pub user_id: String,
    pub prompt: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: Option<ContentRating>,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    pub template_name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl GeneratedContent {
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }
}

/// Create content payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContentCreate {
    pub user_id: String,
    pub prompt: String,
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub language: String,
}

/// Update content payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<ContentRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl GeneratedContentUpdate {
    pub fn rating(rating: ContentRating) -> Self {
        Self {
            rating: Some(rating),
            ..Default::default()
        }
    }

    pub fn publish(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(ContentStatus::Published),
            published_at: Some(at),
            ..Default::default()
        }
    }

    pub fn save_as_template(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            is_template: Some(true),
            template_name: Some(name.into()),
            language: Some(language.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_renamed() {
        let create = GeneratedContentCreate {
            user_id: "u1".into(),
            prompt: "summer".into(),
            content: "text".into(),
            content_type: ContentType::Email,
            status: ContentStatus::Draft,
            language: "en".into(),
        };
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["type"], "email");
        assert_eq!(json["status"], "draft");
    }

    #[test]
    fn test_rating_serde() {
        let json = serde_json::to_value(GeneratedContentUpdate::rating(ContentRating::NotRelevant)).unwrap();
        assert_eq!(json, serde_json::json!({ "rating": "not_relevant" }));
        assert_eq!("not-relevant".parse::<ContentRating>().unwrap(), ContentRating::NotRelevant);
    }

    #[test]
    fn test_publish_update_sets_both_fields() {
        let now = Utc::now();
        let update = GeneratedContentUpdate::publish(now);
        assert_eq!(update.status, Some(ContentStatus::Published));
        assert_eq!(update.published_at, Some(now));
        assert!(update.rating.is_none());
    }
}
