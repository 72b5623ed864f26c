//! Screen view models
//!
//! Each screen owns its page-local state (search text, open forms, the
//! content workflow) on top of the shared data hooks and renders itself
//! as text through the primitives in [`crate::components`].

mod analytics;
mod auth;
mod content;
mod dashboard;
mod orders;
mod products;
mod profile;
mod users;

pub use analytics::{AnalyticsScreen, CATEGORY_SHARE, SalesSummary, WEEKDAY_SALES};
pub use auth::{LoginScreen, RegisterScreen};
pub use content::ContentScreen;
pub use dashboard::{DashboardScreen, DashboardTotals};
pub use orders::{OrderRow, OrdersScreen};
pub use products::{ProductForm, ProductsScreen};
pub use profile::ProfileMenu;
pub use users::UsersScreen;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AdminResult;
use crate::i18n::Translator;
use crate::router::Tab;
use crate::theme::ColorScheme;

/// Everything a screen needs to render
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub translator: Translator,
    pub scheme: ColorScheme,
    pub now: DateTime<Utc>,
}

impl ViewContext {
    pub fn new(translator: Translator, scheme: ColorScheme) -> Self {
        Self {
            translator,
            scheme,
            now: Utc::now(),
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.translator.tr(key)
    }
}

/// One tab of the main app
#[async_trait]
pub trait Screen: Send + Sync {
    fn tab(&self) -> Tab;

    /// Refetch everything the screen shows
    async fn refresh(&self) -> AdminResult<()>;

    async fn render(&self, ctx: &ViewContext) -> String;
}

/// Title line plus optional subtitle
pub(crate) fn header(ctx: &ViewContext, title_key: &str, subtitle_key: Option<&str>) -> String {
    let mut out = ctx.tr(title_key);
    if let Some(key) = subtitle_key {
        out.push('\n');
        out.push_str(&ctx.tr(key));
    }
    out
}

/// Visible error affordance for a failed fetch
pub(crate) fn error_line(ctx: &ViewContext, error: Option<&str>) -> Option<String> {
    error.map(|message| format!("! {}: {} ({})", ctx.tr("common.error"), message, ctx.tr("common.retry")))
}

/// A newer request winning the race is not a failure of the screen
pub(crate) fn settle(result: AdminResult<()>) -> AdminResult<()> {
    match result {
        Err(e) if e.is_superseded() => Ok(()),
        other => other,
    }
}

/// Rows, the error line, or the empty-state message
pub(crate) fn list_body(ctx: &ViewContext, error: Option<&str>, rows: Vec<String>) -> Vec<String> {
    if let Some(line) = error_line(ctx, error) {
        return vec![line];
    }
    if rows.is_empty() {
        return vec![ctx.tr("common.noResults")];
    }
    rows
}
