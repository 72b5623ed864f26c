//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity (`products` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price, always > 0
    pub price: f64,
    /// Units in stock, always >= 0
    pub inventory: i64,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
}

impl Product {
    /// Apply a partial update in place
    pub fn apply(&mut self, update: &ProductUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(inventory) = update.inventory {
            self.inventory = inventory;
        }
        if let Some(image_url) = &update.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
    }
}

/// Create product payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub inventory: i64,
    pub category: String,
    pub image_url: String,
}

/// Update product payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductUpdate {
    /// Update that only changes the price
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Update that only changes the inventory
    pub fn inventory(inventory: i64) -> Self {
        Self {
            inventory: Some(inventory),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<ProductCreate> for ProductUpdate {
    fn from(p: ProductCreate) -> Self {
        Self {
            name: Some(p.name),
            description: Some(p.description),
            price: Some(p.price),
            inventory: Some(p.inventory),
            image_url: Some(p.image_url),
            category: Some(p.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taffy() -> Product {
        Product {
            id: "p1".into(),
            created_at: Utc::now(),
            name: "Taffy".into(),
            description: String::new(),
            price: 1.5,
            inventory: 50,
            image_url: String::new(),
            category: "Chewy".into(),
        }
    }

    #[test]
    fn test_update_skips_none_fields() {
        let json = serde_json::to_value(ProductUpdate::price(2.25)).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 2.25 }));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut p = taffy();
        p.apply(&ProductUpdate {
            inventory: Some(10),
            category: Some("Chewy Candy".into()),
            ..Default::default()
        });
        assert_eq!(p.inventory, 10);
        assert_eq!(p.category, "Chewy Candy");
        assert_eq!(p.price, 1.5);
        assert_eq!(p.name, "Taffy");
    }

    #[test]
    fn test_deserialize_row_without_optional_text() {
        let row = serde_json::json!({
            "id": "p2",
            "created_at": "2025-06-02T10:00:00Z",
            "name": "Lollipops",
            "price": 1.25,
            "inventory": 200,
            "category": "Hard Candy"
        });
        let p: Product = serde_json::from_value(row).unwrap();
        assert_eq!(p.description, "");
        assert_eq!(p.image_url, "");
    }
}
