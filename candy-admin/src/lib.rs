//! Candy Admin - store dashboard
//!
//! Products, orders, staff, analytics and marketing content for a candy
//! store, backed by a hosted table store with password auth.
//!
//! # Layout
//!
//! - [`session`]: injected session container and on-disk cache
//! - [`hooks`]: per-table fetch/mutate units with stale-response guards
//! - [`content`]: generation workflow, content provider, clipboard
//! - [`campaign`]: four-step campaign builder
//! - [`screens`]: view models for every tab
//! - [`app`]: wiring for the hosted and demo backends

pub mod app;
pub mod campaign;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod demo;
pub mod error;
pub mod filter;
pub mod hooks;
pub mod i18n;
pub mod logger;
pub mod router;
pub mod screens;
pub mod session;
pub mod theme;
pub mod validation;

// Re-exports
pub use app::App;
pub use config::AppConfig;
pub use error::{AdminError, AdminResult};
