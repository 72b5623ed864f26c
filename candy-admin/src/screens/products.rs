//! Products tab: searchable list plus the add/edit modal

use async_trait::async_trait;
use shared::models::{Product, ProductUpdate};
use shared::money::format_currency;
use tokio::sync::Mutex;

use super::{Screen, ViewContext, header, list_body, settle};
use crate::components::{Button, Card, Input};
use crate::error::AdminResult;
use crate::filter::SearchFilter;
use crate::hooks::ProductsHook;
use crate::router::Tab;
use crate::validation::ProductDraft;

fn name(p: &Product) -> &str {
    &p.name
}

fn category(p: &Product) -> &str {
    &p.category
}

pub const PRODUCT_SEARCH: SearchFilter<Product> = SearchFilter::new(&[name, category]);

/// Product modal state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub draft: ProductDraft,
    /// Id of the product being edited, `None` when adding
    pub editing: Option<String>,
    pub error: Option<String>,
}

impl ProductForm {
    pub fn edit(product: &Product) -> Self {
        Self {
            draft: ProductDraft {
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price.to_string(),
                inventory: product.inventory.to_string(),
                category: product.category.clone(),
                image_url: product.image_url.clone(),
            },
            editing: Some(product.id.clone()),
            error: None,
        }
    }

    fn render(&self, ctx: &ViewContext, is_loading: bool) -> String {
        let d = &self.draft;
        let fields = [
            Input::new(ctx.tr("products.name")).value(&d.name),
            Input::new(ctx.tr("products.description")).value(&d.description),
            Input::new(ctx.tr("products.price")).value(&d.price).placeholder("0.00"),
            Input::new(ctx.tr("products.inventory")).value(&d.inventory).placeholder("0"),
            Input::new(ctx.tr("products.category")).value(&d.category),
            Input::new(ctx.tr("products.imageUrl")).value(&d.image_url),
        ];
        let title = match self.editing {
            Some(_) => ctx.tr("common.edit"),
            None => ctx.tr("products.addNew"),
        };
        let mut card = Card::titled(title);
        if let Some(error) = &self.error {
            card.push(format!("! {}", error));
        }
        for field in &fields {
            card.push(field.render());
        }
        card.push(Button::new(ctx.tr("common.save")).loading(is_loading).render());
        card.render()
    }
}

pub struct ProductsScreen {
    hook: ProductsHook,
    search: String,
    form: Mutex<Option<ProductForm>>,
}

impl ProductsScreen {
    pub fn new(hook: ProductsHook) -> Self {
        Self {
            hook,
            search: String::new(),
            form: Mutex::new(None),
        }
    }

    pub fn hook(&self) -> &ProductsHook {
        &self.hook
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub async fn visible(&self) -> Vec<Product> {
        let items = self.hook.collection().items().await;
        PRODUCT_SEARCH.apply(&items, &self.search).into_iter().cloned().collect()
    }

    pub async fn open_new(&self) {
        *self.form.lock().await = Some(ProductForm::default());
    }

    pub async fn open_edit(&self, product: &Product) {
        *self.form.lock().await = Some(ProductForm::edit(product));
    }

    pub async fn close_form(&self) {
        *self.form.lock().await = None;
    }

    /// Replace the open form's draft (opens an add form if none is open)
    pub async fn set_draft(&self, draft: ProductDraft) {
        let mut form = self.form.lock().await;
        form.get_or_insert_with(ProductForm::default).draft = draft;
    }

    pub async fn form(&self) -> Option<ProductForm> {
        self.form.lock().await.clone()
    }

    /// Validate and save the open form
    ///
    /// Validation failures stay on the form and never reach the store.
    /// On success the modal closes.
    pub async fn submit(&self) -> AdminResult<Product> {
        let mut guard = self.form.lock().await;
        let form = guard.get_or_insert_with(ProductForm::default);
        let create = match form.draft.validate() {
            Ok(create) => create,
            Err(e) => {
                form.error = Some(e.message.clone());
                return Err(e.into());
            }
        };
        let result = match form.editing.clone() {
            Some(id) => self.hook.update(&id, ProductUpdate::from(create)).await,
            None => self.hook.add(create).await,
        };
        match result {
            Ok(product) => {
                *guard = None;
                Ok(product)
            }
            Err(e) => {
                form.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> AdminResult<()> {
        self.hook.delete(id).await
    }
}

#[async_trait]
impl Screen for ProductsScreen {
    fn tab(&self) -> Tab {
        Tab::Products
    }

    async fn refresh(&self) -> AdminResult<()> {
        settle(self.hook.fetch().await)
    }

    async fn render(&self, ctx: &ViewContext) -> String {
        let state = self.hook.collection().snapshot().await;
        let rows = PRODUCT_SEARCH
            .apply(&state.items, &self.search)
            .into_iter()
            .map(|p| {
                format!(
                    "{}  {}  {}  {}: {}",
                    p.name,
                    p.category,
                    format_currency(p.price),
                    ctx.tr("products.stock"),
                    p.inventory
                )
            })
            .collect();

        let mut out = vec![header(ctx, "products.management", Some("products.subtitle"))];
        if state.is_loading {
            out.push(ctx.tr("common.loading"));
        }
        out.extend(list_body(ctx, state.error.as_deref(), rows));
        if let Some(form) = self.form.lock().await.as_ref() {
            out.push(form.render(ctx, state.is_loading));
        }
        out.join("\n")
    }
}
