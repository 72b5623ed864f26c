//! Analytics tab
//!
//! Headline metrics come from the fetched orders. The weekly series and
//! the category split are fixed sample charts.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use shared::models::{OrderStatus, OrderWithItems, Product};
use shared::money::{format_currency, line_total, sum};

use super::{Screen, ViewContext, error_line, header, settle};
use crate::components::{Card, StatsCard};
use crate::error::AdminResult;
use crate::hooks::{OrdersHook, ProductsHook};
use crate::router::Tab;

/// Daily revenue for the current week, Monday first
pub const WEEKDAY_SALES: [(&str, u32); 7] = [
    ("Mon", 450),
    ("Tue", 500),
    ("Wed", 800),
    ("Thu", 650),
    ("Fri", 700),
    ("Sat", 950),
    ("Sun", 1000),
];

/// Share of sales per category in percent, with its chart color
pub const CATEGORY_SHARE: [(&str, u8, &str); 4] = [
    ("Chocolate", 35, "#A37BED"),
    ("Gummies", 28, "#F97316"),
    ("Hard Candy", 20, "#3B82F6"),
    ("Lollipops", 17, "#4CAF50"),
];

const TOP_PRODUCTS: usize = 4;
const BAR_WIDTH: usize = 20;

/// Headline metrics over a set of orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSummary {
    /// Cancelled orders do not count towards revenue
    pub revenue: f64,
    pub order_count: usize,
    pub items_sold: i64,
    pub customers: usize,
}

impl SalesSummary {
    pub fn from_orders(orders: &[OrderWithItems]) -> Self {
        let billable = || {
            orders
                .iter()
                .filter(|o| o.order.status != OrderStatus::Cancelled)
        };
        Self {
            revenue: sum(billable().map(|o| o.order.total)),
            order_count: orders.len(),
            items_sold: billable().map(OrderWithItems::item_count).sum(),
            customers: orders
                .iter()
                .map(|o| o.order.user_id.as_str())
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

/// Best sellers by units, as `(name, units, revenue)`
pub fn top_products(orders: &[OrderWithItems], products: &[Product], limit: usize) -> Vec<(String, i64, f64)> {
    let names: HashMap<&str, &str> = products.iter().map(|p| (p.id.as_str(), p.name.as_str())).collect();
    let mut totals: HashMap<&str, (i64, Vec<f64>)> = HashMap::new();
    for item in orders
        .iter()
        .filter(|o| o.order.status != OrderStatus::Cancelled)
        .flat_map(|o| &o.items)
    {
        let entry = totals.entry(item.product_id.as_str()).or_default();
        entry.0 += i64::from(item.quantity);
        entry.1.push(line_total(item.price, item.quantity));
    }
    let mut ranked: Vec<(String, i64, f64)> = totals
        .into_iter()
        .map(|(id, (units, lines))| {
            let name = names.get(id).copied().unwrap_or(id).to_string();
            (name, units, sum(lines))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

fn bar(value: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * BAR_WIDTH).div_ceil(max as usize)
    };
    "█".repeat(filled)
}

pub struct AnalyticsScreen {
    orders: OrdersHook,
    products: ProductsHook,
}

impl AnalyticsScreen {
    pub fn new(orders: OrdersHook, products: ProductsHook) -> Self {
        Self { orders, products }
    }

    pub async fn summary(&self) -> SalesSummary {
        SalesSummary::from_orders(&self.orders.collection().items().await)
    }
}

#[async_trait]
impl Screen for AnalyticsScreen {
    fn tab(&self) -> Tab {
        Tab::Analytics
    }

    async fn refresh(&self) -> AdminResult<()> {
        settle(self.products.fetch().await)?;
        settle(self.orders.fetch().await)
    }

    async fn render(&self, ctx: &ViewContext) -> String {
        let mut out = vec![header(ctx, "analytics.title", Some("analytics.subtitle"))];
        if let Some(line) = error_line(ctx, self.orders.collection().error().await.as_deref()) {
            out.push(line);
        }

        let orders = self.orders.collection().items().await;
        let summary = SalesSummary::from_orders(&orders);
        out.push(StatsCard::new(ctx.tr("analytics.metrics.revenue"), format_currency(summary.revenue)).render());
        out.push(StatsCard::new(ctx.tr("analytics.metrics.orders"), summary.order_count).render());
        out.push(StatsCard::new(ctx.tr("analytics.metrics.items"), summary.items_sold).render());
        out.push(StatsCard::new(ctx.tr("analytics.metrics.customers"), summary.customers).render());

        let max = WEEKDAY_SALES.iter().map(|(_, v)| *v).max().unwrap_or(0);
        let mut weekly = Card::titled("Sales Overview");
        for (day, value) in WEEKDAY_SALES {
            weekly.push(format!("{} {:<width$} ${}", day, bar(value, max), value, width = BAR_WIDTH));
        }
        out.push(weekly.render());

        let mut categories = Card::titled("Sales by Category");
        for (name, share, color) in CATEGORY_SHARE {
            categories.push(format!("{:<10} {:>3}% [{}]", name, share, color));
        }
        out.push(categories.render());

        let products = self.products.collection().items().await;
        let mut top = Card::titled("Top Products");
        for (name, units, revenue) in top_products(&orders, &products, TOP_PRODUCTS) {
            top.push(format!("{}  {} sold  {}", name, units, format_currency(revenue)));
        }
        out.push(top.render());
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{Order, OrderItem};

    fn order(id: &str, user: &str, status: OrderStatus, total: f64, lines: &[(&str, i32, f64)]) -> OrderWithItems {
        OrderWithItems {
            order: Order {
                id: id.into(),
                created_at: Utc::now(),
                user_id: user.into(),
                status,
                total,
            },
            items: lines
                .iter()
                .enumerate()
                .map(|(i, (product, qty, price))| OrderItem {
                    id: format!("{}-{}", id, i),
                    order_id: id.into(),
                    product_id: product.to_string(),
                    quantity: *qty,
                    price: *price,
                })
                .collect(),
        }
    }

    fn sample() -> Vec<OrderWithItems> {
        vec![
            order("o1", "u1", OrderStatus::Pending, 24.99, &[("p1", 3, 2.99), ("p2", 2, 3.49)]),
            order("o2", "u2", OrderStatus::Shipped, 47.50, &[("p1", 10, 2.99)]),
            order("o3", "u1", OrderStatus::Cancelled, 19.99, &[("p2", 4, 3.49)]),
        ]
    }

    #[test]
    fn test_summary_excludes_cancelled_revenue() {
        let summary = SalesSummary::from_orders(&sample());
        assert!((summary.revenue - 72.49).abs() < 1e-9);
        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.items_sold, 15);
        assert_eq!(summary.customers, 2);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(SalesSummary::from_orders(&[]), SalesSummary::default());
    }

    #[test]
    fn test_top_products_ranked_by_units() {
        let top = top_products(&sample(), &[], 4);
        assert_eq!(top[0].0, "p1");
        assert_eq!(top[0].1, 13);
        assert_eq!((top[1].0.as_str(), top[1].1), ("p2", 2));
        assert!((top[1].2 - 6.98).abs() < 1e-9);
    }

    #[test]
    fn test_category_share_adds_up() {
        let total: u32 = CATEGORY_SHARE.iter().map(|(_, share, _)| u32::from(*share)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(1000, 1000).chars().count(), BAR_WIDTH);
        assert_eq!(bar(450, 1000).chars().count(), 9);
        assert_eq!(bar(5, 0), "");
    }
}
