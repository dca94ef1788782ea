//! Read-only fetch traits for the content repository and user directory.
//!
//! Every call is synchronous and either succeeds or fails immediately; no
//! retries happen at this layer. "Record not found" is a successful `None`,
//! not an error — resolution failures become errors at the entity layer.

use thiserror::Error;

use corpus_core::{ContentId, DomainError, UserId};

use crate::query::{ContentQuery, QueryContext, UserQuery};
use crate::record::{ContentRecord, UserRecord};

/// Result type for store-boundary calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure at the repository boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend rejected or failed the call.
    #[error("backend failure: {0}")]
    Backend(String),

    /// Shared state was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::storage(err.to_string())
    }
}

/// Read interface of the external content repository.
pub trait ContentStore {
    /// Fetch one record by id; `Ok(None)` when the id resolves to nothing.
    fn fetch_by_id(&self, id: ContentId) -> StoreResult<Option<ContentRecord>>;

    /// Execute a filtered query, returning matching records in the engine's
    /// order together with its pagination metadata.
    fn fetch_by_query(&self, query: &ContentQuery)
    -> StoreResult<(Vec<ContentRecord>, QueryContext)>;
}

/// Read interface of the external user directory.
pub trait UserDirectory {
    /// Fetch one user record by id; `Ok(None)` when the id is unknown.
    fn fetch_user_by_id(&self, id: UserId) -> StoreResult<Option<UserRecord>>;

    /// Execute a filtered query projected down to matching user ids.
    fn fetch_user_ids(&self, query: &UserQuery) -> StoreResult<Vec<UserId>>;
}
