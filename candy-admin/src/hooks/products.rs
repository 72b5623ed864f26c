//! Products hook

use std::sync::Arc;

use candy_client::{Query, RemoteStore, decode_row, decode_rows, encode_row};
use shared::models::{Product, ProductCreate, ProductUpdate, tables};
use shared::{AppError, ErrorCode};

use super::Collection;
use crate::error::AdminResult;
use crate::validation::{validate_create, validate_update};

#[derive(Clone)]
pub struct ProductsHook {
    store: Arc<dyn RemoteStore>,
    products: Collection<Product>,
}

impl ProductsHook {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            products: Collection::new(),
        }
    }

    pub fn collection(&self) -> &Collection<Product> {
        &self.products
    }

    /// Reload every product, newest first
    pub async fn fetch(&self) -> AdminResult<()> {
        let ticket = self.products.begin().await;
        let result = self.load().await;
        if let Err(e) = &result {
            tracing::error!(table = tables::PRODUCTS, error = %e, "Error fetching products");
        }
        self.products.complete(ticket, result).await
    }

    /// Validate and insert; the stored row goes to the front of the list
    ///
    /// Invalid input is rejected before any remote call.
    pub async fn add(&self, product: ProductCreate) -> AdminResult<Product> {
        validate_create(&product)?;
        self.products.start_mutation().await;
        let result = self.insert(&product).await;
        if let Err(e) = &result {
            tracing::error!(table = tables::PRODUCTS, name = %product.name, error = %e, "Error adding product");
        }
        self.products
            .finish_mutation(result, |items, added| items.insert(0, added.clone()))
            .await
    }

    pub async fn update(&self, id: &str, update: ProductUpdate) -> AdminResult<Product> {
        validate_update(&update)?;
        self.products.start_mutation().await;
        let result = self.patch(id, &update).await;
        if let Err(e) = &result {
            tracing::error!(table = tables::PRODUCTS, id = %id, error = %e, "Error updating product");
        }
        self.products
            .finish_mutation(result, |items, updated| {
                if let Some(slot) = items.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated.clone();
                }
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> AdminResult<()> {
        self.products.start_mutation().await;
        let result: AdminResult<()> = self
            .store
            .delete(tables::PRODUCTS, &Query::by_id(id))
            .await
            .map_err(Into::into);
        if let Err(e) = &result {
            tracing::error!(table = tables::PRODUCTS, id = %id, error = %e, "Error deleting product");
        }
        self.products
            .finish_mutation(result, |items, _| items.retain(|p| p.id != id))
            .await
    }

    async fn load(&self) -> AdminResult<Vec<Product>> {
        let rows = self
            .store
            .select(tables::PRODUCTS, &Query::new().order("created_at", false))
            .await?;
        Ok(decode_rows(rows)?)
    }

    async fn insert(&self, product: &ProductCreate) -> AdminResult<Product> {
        let rows = self.store.insert(tables::PRODUCTS, vec![encode_row(product)?]).await?;
        Ok(decode_row(rows)?)
    }

    async fn patch(&self, id: &str, update: &ProductUpdate) -> AdminResult<Product> {
        let rows = self
            .store
            .update(tables::PRODUCTS, &Query::by_id(id), encode_row(update)?)
            .await?;
        if rows.is_empty() {
            return Err(AppError::new(ErrorCode::ProductNotFound).with_detail("id", id).into());
        }
        Ok(decode_row(rows)?)
    }
}
