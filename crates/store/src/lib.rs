//! `corpus-store` — the external content-repository boundary.
//!
//! This crate defines the read-only abstraction over the external content
//! repository and user directory without making any storage assumptions:
//! raw record shapes, filter/query parameters, pagination metadata, the
//! fetch traits, and in-memory implementations for tests/dev. It also holds
//! the explicit request context that replaces ambient per-request globals.

pub mod context;
pub mod in_memory;
pub mod query;
pub mod record;
pub mod r#trait;

pub use context::{ModelContext, RequestContext};
pub use in_memory::{InMemoryContentStore, InMemoryUserDirectory};
pub use query::{ContentQuery, QueryContext, UserQuery};
pub use record::{ContentRecord, Thumbnail, UserRecord};
pub use r#trait::{ContentStore, StoreError, StoreResult, UserDirectory};
