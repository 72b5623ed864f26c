use async_trait::async_trait;

use super::{Screen, ViewContext, error_line, settle};
use crate::components::StatsCard;
use crate::error::AdminResult;
use crate::hooks::{EventTemplatesHook, ProductsHook, UsersHook};
use crate::router::Tab;
use crate::session::SessionStore;
use crate::theme::{ColorName, ColorOverrides, theme_color};

/// Welcome banner plus the four overview tiles
pub struct DashboardScreen {
    sessions: SessionStore,
    products: ProductsHook,
    users: UsersHook,
    events: EventTemplatesHook,
}

/// Tile values derived from the hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardTotals {
    pub total_candies: i64,
    pub active_promotions: usize,
    pub users_online: usize,
}

impl DashboardScreen {
    pub fn new(sessions: SessionStore, products: ProductsHook, users: UsersHook, events: EventTemplatesHook) -> Self {
        Self {
            sessions,
            products,
            users,
            events,
        }
    }

    pub async fn totals(&self, ctx: &ViewContext) -> DashboardTotals {
        let products = self.products.collection().items().await;
        let events = self.events.events().items().await;
        DashboardTotals {
            total_candies: products.iter().map(|p| p.inventory).sum(),
            active_promotions: events.iter().filter(|e| e.is_active(ctx.now)).count(),
            users_online: self.users.collection().items().await.len(),
        }
    }
}

#[async_trait]
impl Screen for DashboardScreen {
    fn tab(&self) -> Tab {
        Tab::Dashboard
    }

    async fn refresh(&self) -> AdminResult<()> {
        settle(self.products.fetch().await)?;
        settle(self.users.fetch().await)?;
        settle(self.events.fetch_upcoming_events(chrono::Utc::now()).await)
    }

    async fn render(&self, ctx: &ViewContext) -> String {
        let state = self.sessions.snapshot().await;
        let name = state.email().unwrap_or_default().to_string();
        let mut out = vec![
            ctx.translator.t("dashboard.welcome", &[("name", &name)]),
            ctx.tr("dashboard.overview"),
        ];

        let errors = [
            self.products.collection().error().await,
            self.users.collection().error().await,
            self.events.events().error().await,
        ];
        out.extend(errors.iter().filter_map(|e| error_line(ctx, e.as_deref())));

        let totals = self.totals(ctx).await;
        let color = |name| theme_color(ctx.scheme, ColorOverrides::NONE, name);
        let tiles = [
            StatsCard::new(ctx.tr("dashboard.totalCandies"), totals.total_candies).icon_color(color(ColorName::Primary)),
            StatsCard::new(ctx.tr("dashboard.activePromotions"), totals.active_promotions)
                .icon_color(color(ColorName::Secondary)),
            StatsCard::new(ctx.tr("dashboard.usersOnline"), totals.users_online).icon_color(color(ColorName::Info)),
            StatsCard::new(ctx.tr("dashboard.siteSettings"), "›").icon_color(color(ColorName::Gray)),
        ];
        out.extend(tiles.iter().map(StatsCard::render));
        out.join("\n")
    }
}
