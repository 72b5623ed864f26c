//! In-process backend
//!
//! [`MemoryStore`] and [`MemoryIdentity`] stand in for the hosted
//! backend in tests and in the CLI demo mode.

mod identity;
mod store;

pub use identity::MemoryIdentity;
pub use store::{MemoryStore, RpcHandler, StoreOp, Tables};
