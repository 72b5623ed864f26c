//! Orders tab

use std::collections::HashMap;

use async_trait::async_trait;
use shared::models::{OrderStatus, OrderWithItems};
use shared::money::format_currency;
use shared::util::relative_time;

use super::{Screen, ViewContext, error_line, header, list_body, settle};
use crate::error::AdminResult;
use crate::filter::SearchFilter;
use crate::hooks::{OrdersHook, UsersHook};
use crate::router::Tab;
use crate::theme::order_status_color;

/// Order joined with the customer's display name
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order: OrderWithItems,
    pub customer: String,
}

fn customer(row: &OrderRow) -> &str {
    &row.customer
}

fn order_id(row: &OrderRow) -> &str {
    &row.order.order.id
}

pub const ORDER_SEARCH: SearchFilter<OrderRow> = SearchFilter::new(&[customer, order_id]);

pub fn status_label_key(status: OrderStatus) -> String {
    format!("orders.status.{}", status.as_str())
}

pub struct OrdersScreen {
    orders: OrdersHook,
    users: UsersHook,
    search: String,
}

impl OrdersScreen {
    pub fn new(orders: OrdersHook, users: UsersHook) -> Self {
        Self {
            orders,
            users,
            search: String::new(),
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Orders with customer names resolved from the profiles; unknown
    /// customers show a shortened user id
    pub async fn rows(&self) -> Vec<OrderRow> {
        let names: HashMap<String, String> = self
            .users
            .collection()
            .items()
            .await
            .into_iter()
            .filter_map(|u| Some((u.user_id?, u.full_name)))
            .collect();
        self.orders
            .collection()
            .items()
            .await
            .into_iter()
            .map(|order| {
                let customer = names
                    .get(&order.order.user_id)
                    .cloned()
                    .unwrap_or_else(|| order.order.user_id.chars().take(8).collect());
                OrderRow { order, customer }
            })
            .collect()
    }

    pub async fn visible(&self) -> Vec<OrderRow> {
        let rows = self.rows().await;
        ORDER_SEARCH.apply(&rows, &self.search).into_iter().cloned().collect()
    }

    pub async fn set_status(&self, id: &str, status: OrderStatus) -> AdminResult<()> {
        self.orders.update_status(id, status).await
    }
}

#[async_trait]
impl Screen for OrdersScreen {
    fn tab(&self) -> Tab {
        Tab::Orders
    }

    async fn refresh(&self) -> AdminResult<()> {
        settle(self.users.fetch().await)?;
        settle(self.orders.fetch().await)
    }

    async fn render(&self, ctx: &ViewContext) -> String {
        let lines = self
            .visible()
            .await
            .iter()
            .map(|row| {
                let order = &row.order.order;
                format!(
                    "#{}  {}  {}  {} [{}]  {}",
                    order.id.chars().take(8).collect::<String>(),
                    row.customer,
                    format_currency(order.total),
                    ctx.tr(&status_label_key(order.status)),
                    order_status_color(order.status),
                    relative_time(order.created_at, ctx.now),
                )
            })
            .collect();

        let mut out = vec![header(ctx, "orders.management", Some("orders.subtitle"))];
        if let Some(line) = error_line(ctx, self.users.collection().error().await.as_deref()) {
            out.push(line);
        }
        out.extend(list_body(ctx, self.orders.collection().error().await.as_deref(), lines));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::Order;

    fn row(id: &str, customer: &str) -> OrderRow {
        OrderRow {
            order: OrderWithItems {
                order: Order {
                    id: id.into(),
                    created_at: Utc::now(),
                    user_id: "u".into(),
                    status: OrderStatus::Pending,
                    total: 10.0,
                },
                items: Vec::new(),
            },
            customer: customer.into(),
        }
    }

    #[test]
    fn test_search_by_customer_or_id() {
        let rows = vec![row("ORD-1001", "John Doe"), row("ORD-1002", "Jane Smith")];
        assert_eq!(ORDER_SEARCH.apply(&rows, "jane").len(), 1);
        assert_eq!(ORDER_SEARCH.apply(&rows, "1001")[0].customer, "John Doe");
        assert_eq!(ORDER_SEARCH.apply(&rows, "ord-").len(), 2);
        assert!(ORDER_SEARCH.apply(&rows, "zzz").is_empty());
    }

    #[test]
    fn test_status_label_keys() {
        assert_eq!(status_label_key(OrderStatus::Shipped), "orders.status.shipped");
    }
}
