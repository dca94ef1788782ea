//! Filter parameters and pagination metadata for repository queries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use corpus_core::ContentId;

/// Default page size when paging is active and the caller set none.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Filter parameters for content queries.
///
/// Recognized keys are modeled; anything else travels in `extra` and is
/// passed through to the backend opaquely. Total-row counting is opt-in:
/// it stays disabled unless the caller asks for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentQuery {
    #[serde(default)]
    pub id: Option<ContentId>,
    #[serde(default)]
    pub parent: Option<ContentId>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub count_total: bool,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub no_paging: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ContentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<ContentId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn count_total(mut self) -> Self {
        self.count_total = true;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Disable pagination: the query returns every match.
    pub fn unpaged(mut self) -> Self {
        self.no_paging = true;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Filter parameters for user-directory queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    /// Maximum number of ids to return; `None` = no limit.
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Clear any result limit.
    pub fn unlimited(mut self) -> Self {
        self.count = None;
        self
    }
}

/// Pagination metadata produced by the query engine.
///
/// Immutable once constructed. `total` is `Some` only when the query asked
/// for total-row counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContext {
    pub total: Option<u64>,
    pub pages: u64,
    pub page: u32,
    pub per_page: Option<u32>,
    pub has_more: bool,
}

impl QueryContext {
    /// Metadata for an unpaginated result set.
    pub fn unpaged(returned: u64, total: Option<u64>) -> Self {
        Self {
            total,
            pages: if returned > 0 { 1 } else { 0 },
            page: 1,
            per_page: None,
            has_more: false,
        }
    }
}
