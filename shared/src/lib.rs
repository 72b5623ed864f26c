//! Shared types for the candy store admin
//!
//! Row models mirrored from the remote store, the unified error system,
//! money arithmetic and time helpers used by both the client and the
//! admin application.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
