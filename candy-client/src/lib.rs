//! Candy Client - access to the hosted backend
//!
//! Table/RPC access through [`RemoteStore`] and password auth through
//! [`IdentityProvider`], each with an HTTP implementation and an
//! in-process one.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod query;
pub mod store;

pub use auth::{AuthUser, GoTrueAuth, IdentityProvider, Session};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::RestClient;
pub use memory::{MemoryIdentity, MemoryStore, RpcHandler, StoreOp, Tables};
pub use query::{Filter, FilterOp, OrderBy, Query};
pub use store::{RemoteStore, RestStore, decode_row, decode_rows, encode_row};
