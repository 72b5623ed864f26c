//! Application configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CANDY_STORE_URL | http://localhost:54321 | Hosted backend base URL |
//! | CANDY_STORE_KEY | (empty) | Public anon key |
//! | CANDY_LANGUAGE | en | UI language (en, ar, he, ru) |
//! | CANDY_COLOR_SCHEME | light | light or dark |
//! | CANDY_WORK_DIR | ./candy-data | Session cache location |
//! | CANDY_TIMEOUT_SECS | 30 | HTTP timeout |
//! | LOG_LEVEL | info | tracing filter |
//! | LOG_DIR | (unset) | Daily rolling log directory |

use std::path::PathBuf;

use candy_client::ClientConfig;

use crate::i18n::Language;
use crate::theme::ColorScheme;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_url: String,
    pub store_key: String,
    pub language: Language,
    pub color_scheme: ColorScheme,
    pub work_dir: PathBuf,
    pub timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl AppConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            store_url: std::env::var("CANDY_STORE_URL").unwrap_or_else(|_| "http://localhost:54321".into()),
            store_key: std::env::var("CANDY_STORE_KEY").unwrap_or_default(),
            language: std::env::var("CANDY_LANGUAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            color_scheme: std::env::var("CANDY_COLOR_SCHEME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            work_dir: std::env::var("CANDY_WORK_DIR")
                .unwrap_or_else(|_| "./candy-data".into())
                .into(),
            timeout_secs: std::env::var("CANDY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(candy_client::config::DEFAULT_TIMEOUT_SECS),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Configuration rooted at `work_dir`, everything else default
    ///
    /// Used by tests.
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.store_url, &self.store_key).with_timeout(self.timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: "http://localhost:54321".into(),
            store_key: String::new(),
            language: Language::default(),
            color_scheme: ColorScheme::default(),
            work_dir: "./candy-data".into(),
            timeout_secs: candy_client::config::DEFAULT_TIMEOUT_SECS,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
