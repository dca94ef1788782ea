//! In-memory store implementations.
//!
//! Intended for tests/dev. Not optimized for performance. Both stores count
//! the calls they receive so tests can assert how many round-trips an
//! operation issued (including zero).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use corpus_core::{ContentId, UserId};

use crate::query::{ContentQuery, QueryContext, UserQuery, DEFAULT_PER_PAGE};
use crate::record::{ContentRecord, UserRecord};
use crate::r#trait::{ContentStore, StoreError, StoreResult, UserDirectory};

/// In-memory content repository.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    records: RwLock<HashMap<ContentId, ContentRecord>>,
    fetches: AtomicU64,
    queries: AtomicU64,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = ContentRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Seed or replace one record. Seeding recovers from a poisoned lock:
    /// the map itself stays consistent across a writer panic.
    pub fn insert(&self, record: ContentRecord) {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        records.insert(record.id, record);
    }

    /// Number of by-id fetches served so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Number of filtered queries served so far.
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }
}

impl ContentStore for InMemoryContentStore {
    fn fetch_by_id(&self, id: ContentId) -> StoreResult<Option<ContentRecord>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        debug!(%id, "fetch content by id");
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    fn fetch_by_query(
        &self,
        query: &ContentQuery,
    ) -> StoreResult<(Vec<ContentRecord>, QueryContext)> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        debug!(?query, "fetch content by query");
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut matched: Vec<ContentRecord> = records
            .values()
            .filter(|r| query.id.is_none_or(|id| r.id == id))
            .filter(|r| query.parent.is_none_or(|p| r.parent == Some(p)))
            .filter(|r| query.kind.as_deref().is_none_or(|k| r.kind == k))
            .cloned()
            .collect();
        // Deterministic engine order: ascending id.
        matched.sort_by_key(|r| r.id);

        let matched_count = matched.len() as u64;
        let total = query.count_total.then_some(matched_count);

        if query.no_paging {
            return Ok((matched, QueryContext::unpaged(matched_count, total)));
        }

        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let page = query.page.unwrap_or(1).max(1);
        let offset = (page as u64 - 1) * per_page as u64;

        let window: Vec<ContentRecord> = matched
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .collect();

        let pages = matched_count.div_ceil(per_page as u64);
        let context = QueryContext {
            total,
            pages,
            page,
            per_page: Some(per_page),
            has_more: offset + (window.len() as u64) < matched_count,
        };
        Ok((window, context))
    }
}

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, UserRecord>>,
    fetches: AtomicU64,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let directory = Self::new();
        for user in users {
            directory.insert(user);
        }
        directory
    }

    /// Seed or replace one user record. Seeding recovers from a poisoned
    /// lock, as the content store does.
    pub fn insert(&self, user: UserRecord) {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.insert(user.id, user);
    }

    /// Number of by-id fetches served so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn fetch_user_by_id(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        debug!(%id, "fetch user by id");
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.get(&id).cloned())
    }

    fn fetch_user_ids(&self, query: &UserQuery) -> StoreResult<Vec<UserId>> {
        debug!(?query, "fetch user ids by query");
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut ids: Vec<UserId> = users.keys().copied().collect();
        ids.sort();
        if let Some(count) = query.count {
            ids.truncate(count as usize);
        }
        Ok(ids)
    }
}
