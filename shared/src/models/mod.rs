//! Data models
//!
//! Plain records mirrored from the remote store tables. Every `*Create`
//! payload omits the store-assigned `id`/`created_at`; every `*Update`
//! payload skips `None` fields so it can be sent as a partial patch.
//! All IDs are strings (UUIDs assigned by the store).

pub mod content;
pub mod event;
pub mod order;
pub mod product;
pub mod template;
pub mod user_profile;

// Re-exports
pub use content::*;
pub use event::*;
pub use order::*;
pub use product::*;
pub use template::*;
pub use user_profile::*;

/// Table names in the remote store
pub mod tables {
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
    pub const ORDER_ITEMS: &str = "order_items";
    pub const USER_PROFILES: &str = "user_profiles";
    pub const GENERATED_CONTENT: &str = "generated_content";
    pub const TEMPLATE_EVENTS: &str = "template_events";
}

/// Remote procedure names
pub mod rpc {
    pub const CLONE_TEMPLATE_FOR_EVENT: &str = "clone_template_for_event";
}
