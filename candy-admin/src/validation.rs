//! Product form validation
//!
//! Checks run in form order (name, price, inventory, category) and stop
//! at the first failure, so the message shown is always the first field
//! that needs fixing.

use shared::models::{ProductCreate, ProductUpdate};
use shared::money;
use shared::{AppError, AppResult, ErrorCode};

/// Raw text of the product modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub inventory: String,
    pub category: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Trim, parse and check every field
    pub fn validate(&self) -> AppResult<ProductCreate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::new(ErrorCode::ProductNameRequired));
        }
        let price = parse_price(&self.price)?;
        let inventory = parse_inventory(&self.inventory)?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(AppError::new(ErrorCode::ProductCategoryRequired));
        }
        Ok(ProductCreate {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            inventory,
            category: category.to_string(),
            image_url: self.image_url.trim().to_string(),
        })
    }
}

/// Price must be a finite number > 0
pub fn parse_price(input: &str) -> AppResult<f64> {
    money::parse_amount(input)
        .filter(|p| *p > 0.0)
        .ok_or_else(|| AppError::new(ErrorCode::ProductInvalidPrice))
}

/// Inventory must be a whole number >= 0
pub fn parse_inventory(input: &str) -> AppResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| AppError::new(ErrorCode::ProductInvalidInventory))
}

pub fn validate_price(price: f64) -> AppResult<()> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::ProductInvalidPrice))
    }
}

pub fn validate_inventory(inventory: i64) -> AppResult<()> {
    if inventory >= 0 {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::ProductInvalidInventory))
    }
}

/// Validate an already-typed create payload
pub fn validate_create(product: &ProductCreate) -> AppResult<()> {
    if product.name.trim().is_empty() {
        return Err(AppError::new(ErrorCode::ProductNameRequired));
    }
    validate_price(product.price)?;
    validate_inventory(product.inventory)?;
    if product.category.trim().is_empty() {
        return Err(AppError::new(ErrorCode::ProductCategoryRequired));
    }
    Ok(())
}

/// Validate the fields present in a partial update
pub fn validate_update(update: &ProductUpdate) -> AppResult<()> {
    if update.is_empty() {
        return Err(AppError::validation("Nothing to update"));
    }
    if let Some(name) = &update.name
        && name.trim().is_empty()
    {
        return Err(AppError::new(ErrorCode::ProductNameRequired));
    }
    if let Some(price) = update.price {
        validate_price(price)?;
    }
    if let Some(inventory) = update.inventory {
        validate_inventory(inventory)?;
    }
    if let Some(category) = &update.category
        && category.trim().is_empty()
    {
        return Err(AppError::new(ErrorCode::ProductCategoryRequired));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taffy() -> ProductDraft {
        ProductDraft {
            name: " Taffy ".into(),
            description: String::new(),
            price: "1.50".into(),
            inventory: "50".into(),
            category: "Chewy".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let product = taffy().validate().unwrap();
        assert_eq!(product.name, "Taffy");
        assert_eq!(product.price, 1.5);
        assert_eq!(product.inventory, 50);
    }

    #[test]
    fn test_first_failing_field_wins() {
        let draft = ProductDraft::default();
        assert_eq!(draft.validate().unwrap_err().message, "Product name is required");

        let draft = ProductDraft {
            price: "-1".into(),
            inventory: "abc".into(),
            ..taffy()
        };
        assert_eq!(draft.validate().unwrap_err().message, "Please enter a valid price");

        let draft = ProductDraft {
            inventory: "-3".into(),
            ..taffy()
        };
        assert_eq!(
            draft.validate().unwrap_err().message,
            "Please enter a valid inventory amount"
        );

        let draft = ProductDraft {
            category: "  ".into(),
            ..taffy()
        };
        assert_eq!(draft.validate().unwrap_err().message, "Category is required");
    }

    #[test]
    fn test_price_rules() {
        assert!(parse_price("0").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("NaN").is_err());
        assert_eq!(parse_price("$2.99").unwrap(), 2.99);
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_update_rules() {
        assert!(validate_update(&ProductUpdate::price(2.0)).is_ok());
        assert_eq!(
            validate_update(&ProductUpdate::price(0.0)).unwrap_err().code,
            ErrorCode::ProductInvalidPrice
        );
        assert!(validate_update(&ProductUpdate::inventory(-1)).is_err());
        assert!(validate_update(&ProductUpdate::default()).is_err());
    }
}
