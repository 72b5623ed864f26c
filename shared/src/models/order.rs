//! Order Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Order status
///
/// Transitions are free-form: any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::OrderInvalidStatus,
                    format!("Invalid order status: {}", s),
                )
            })
    }
}

/// Order entity (`orders` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub status: OrderStatus,
    /// Order total, always >= 0
    pub total: f64,
}

/// Order line (`order_items` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    /// Always > 0
    pub quantity: i32,
    /// Unit price at the time of the order
    pub price: f64,
}

/// Order together with its lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl OrderWithItems {
    /// Total number of units across all lines
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i64::from(i.quantity)).sum()
    }
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: String,
    pub total: f64,
    pub status: OrderStatus,
}

/// Line input supplied by the caller when creating an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

/// Create order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub price: f64,
}

impl OrderItemCreate {
    pub fn for_order(order_id: &str, input: &OrderItemInput) -> Self {
        Self {
            order_id: order_id.to_string(),
            product_id: input.product_id.clone(),
            quantity: input.quantity,
            price: input.price,
        }
    }
}

/// Update order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!(" Delivered ".parse::<OrderStatus>().unwrap(), OrderStatus::Delivered);
        let err = "lost".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidStatus);
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }

    #[test]
    fn test_order_with_items_flattened() {
        let row = serde_json::json!({
            "id": "o1",
            "created_at": "2025-06-02T10:00:00Z",
            "user_id": "u1",
            "status": "pending",
            "total": 24.99,
            "items": [
                { "id": "i1", "order_id": "o1", "product_id": "p1", "quantity": 2, "price": 2.99 },
                { "id": "i2", "order_id": "o1", "product_id": "p2", "quantity": 1, "price": 3.49 }
            ]
        });
        let order: OrderWithItems = serde_json::from_value(row).unwrap();
        assert_eq!(order.order.id, "o1");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
    }
}
