//! Orders hook
//!
//! Orders and their lines live in separate tables. Creating an order is
//! two writes (order row, then item rows) and is not transactional: when
//! the second write fails the order row stays and the caller is told.

use std::collections::HashMap;
use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_row, decode_rows, encode_row};
use shared::models::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemInput, OrderStatus, OrderStatusUpdate, OrderWithItems,
    tables,
};
use shared::{AppError, ErrorCode};

use super::Collection;
use crate::error::{AdminError, AdminResult};

#[derive(Clone)]
pub struct OrdersHook {
    store: Arc<dyn RemoteStore>,
    orders: Collection<OrderWithItems>,
}

impl OrdersHook {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            orders: Collection::new(),
        }
    }

    pub fn collection(&self) -> &Collection<OrderWithItems> {
        &self.orders
    }

    /// Reload orders (newest first) together with their lines
    pub async fn fetch(&self) -> AdminResult<()> {
        let ticket = self.orders.begin().await;
        let result = self.load().await;
        if let Err(e) = &result {
            tracing::error!(table = tables::ORDERS, error = %e, "Error fetching orders");
        }
        self.orders.complete(ticket, result).await
    }

    /// Create a pending order and its lines, then refetch
    pub async fn add_order(&self, user_id: &str, items: Vec<OrderItemInput>, total: f64) -> AdminResult<Order> {
        validate_order(&items, total)?;
        self.orders.start_mutation().await;

        let order = match self.insert_order(user_id, total).await {
            Ok(order) => order,
            Err(e) => {
                tracing::error!(table = tables::ORDERS, user_id = %user_id, error = %e, "Error adding order");
                return self.orders.finish_mutation(Err(e), |_, _: &Order| {}).await;
            }
        };

        let lines = items
            .iter()
            .map(|item| encode_row(&OrderItemCreate::for_order(&order.id, item)))
            .collect::<Result<Vec<_>, _>>();
        let items_result = match lines {
            Ok(lines) => self.store.insert(tables::ORDER_ITEMS, lines).await.map(|_| ()),
            Err(e) => Err(e),
        };

        let result = match items_result {
            Ok(()) => {
                tracing::info!(order_id = %order.id, items = items.len(), "Order created");
                Ok(order)
            }
            Err(e) => {
                tracing::error!(table = tables::ORDER_ITEMS, order_id = %order.id, error = %e, "Error adding order items");
                Err(AdminError::from(
                    AppError::new(ErrorCode::OrderItemsFailed)
                        .with_detail("order_id", order.id.as_str())
                        .with_detail("cause", e.to_string()),
                ))
            }
        };
        let result = self.orders.finish_mutation(result, |_, _| {}).await;

        // The order row exists either way; show it
        if let Err(e) = self.fetch().await
            && !e.is_superseded()
        {
            tracing::warn!(error = %e, "Refetch after add_order failed");
        }
        result
    }

    /// Set an order's status; any transition is allowed
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> AdminResult<()> {
        self.orders.start_mutation().await;
        let result = self.patch_status(id, status).await;
        if let Err(e) = &result {
            tracing::error!(table = tables::ORDERS, id = %id, status = %status, error = %e, "Error updating order status");
        }
        self.orders
            .finish_mutation(result, |orders, _| {
                if let Some(o) = orders.iter_mut().find(|o| o.order.id == id) {
                    o.order.status = status;
                }
            })
            .await
    }

    async fn load(&self) -> AdminResult<Vec<OrderWithItems>> {
        let rows = self
            .store
            .select(tables::ORDERS, &Query::new().order("created_at", false))
            .await?;
        let orders: Vec<Order> = decode_rows(rows)?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = orders.iter().map(|o| o.id.clone()).collect();
        let rows = self
            .store
            .select(tables::ORDER_ITEMS, &Query::new().in_list("order_id", ids))
            .await?;
        let mut by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for item in decode_rows::<OrderItem>(rows)? {
            by_order.entry(item.order_id.clone()).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }

    async fn insert_order(&self, user_id: &str, total: f64) -> AdminResult<Order> {
        let create = OrderCreate {
            user_id: user_id.to_string(),
            total,
            status: OrderStatus::Pending,
        };
        let rows = self.store.insert(tables::ORDERS, vec![encode_row(&create)?]).await?;
        Ok(decode_row(rows)?)
    }

    async fn patch_status(&self, id: &str, status: OrderStatus) -> AdminResult<()> {
        let rows = self
            .store
            .update(tables::ORDERS, &Query::by_id(id), encode_row(&OrderStatusUpdate { status })?)
            .await?;
        if rows.is_empty() {
            return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", id).into());
        }
        Ok(())
    }
}

fn validate_order(items: &[OrderItemInput], total: f64) -> AdminResult<()> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty).into());
    }
    if items.iter().any(|i| i.quantity <= 0) {
        return Err(AppError::validation("Quantity must be greater than zero").into());
    }
    if !total.is_finite() || total < 0.0 {
        return Err(AppError::new(ErrorCode::ValueOutOfRange).with_detail("total", total).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_client::{MemoryStore, StoreOp};
    use serde_json::json;

    fn line(product_id: &str, quantity: i32, price: f64) -> OrderItemInput {
        OrderItemInput {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }

    async fn hook() -> (OrdersHook, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        store
            .seed(
                tables::ORDERS,
                vec![json!({
                    "id": "o1",
                    "created_at": "2025-05-30T09:00:00Z",
                    "user_id": "u1",
                    "status": "delivered",
                    "total": 12.75
                })],
            )
            .await;
        store
            .seed(
                tables::ORDER_ITEMS,
                vec![json!({ "id": "i1", "order_id": "o1", "product_id": "p3", "quantity": 2, "price": 1.25 })],
            )
            .await;
        (OrdersHook::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_fetch_joins_items() {
        let (hook, _) = hook().await;
        hook.fetch().await.unwrap();
        let orders = hook.collection().items().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].items.len(), 1);
        assert_eq!(orders[0].item_count(), 2);
    }

    #[tokio::test]
    async fn test_add_order_is_pending_and_first() {
        let (hook, store) = hook().await;
        let order = hook
            .add_order("u2", vec![line("p1", 2, 2.99), line("p2", 1, 3.49)], 9.47)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(store.rows(tables::ORDER_ITEMS).await.len(), 3);

        let orders = hook.collection().items().await;
        assert_eq!(orders[0].order.id, order.id);
        assert_eq!(orders[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_order_insert_failure_sets_error() {
        let (hook, store) = hook().await;
        store.fail_next(StoreOp::Insert, "new row violates row-level security policy").await;
        let err = hook.add_order("u2", vec![line("p1", 1, 2.99)], 2.99).await.unwrap_err();
        assert_eq!(err.user_message(), "new row violates row-level security policy");
        assert_eq!(store.rows(tables::ORDERS).await.len(), 1);
        assert!(store.rows(tables::ORDER_ITEMS).await.len() == 1);
        assert!(hook.collection().error().await.is_some());
    }

    #[tokio::test]
    async fn test_update_status_free_form() {
        let (hook, _) = hook().await;
        hook.fetch().await.unwrap();
        hook.update_status("o1", OrderStatus::Pending).await.unwrap();
        assert_eq!(hook.collection().items().await[0].order.status, OrderStatus::Pending);
        let err = hook.update_status("nope", OrderStatus::Shipped).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::OrderNotFound);
    }

    #[tokio::test]
    async fn test_empty_order_rejected() {
        let (hook, store) = hook().await;
        let err = hook.add_order("u2", Vec::new(), 0.0).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::OrderEmpty);
        assert_eq!(store.call_count(StoreOp::Insert), 0);
    }
}
