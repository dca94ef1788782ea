//! Explicit request-scoped context.
//!
//! The original model inferred default identities from ambient globals. Here
//! the same information travels in an explicit [`RequestContext`] threaded
//! into entity constructors, which keeps the coupling visible and tests
//! deterministic. The context is read-only from the model's perspective.

use std::rc::Rc;

use crate::record::{ContentRecord, UserRecord};
use crate::r#trait::{ContentStore, UserDirectory};

/// What the surrounding request currently designates, if anything.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// The identity object the request resolved to (e.g. an author archive).
    pub queried_user: Option<UserRecord>,
    /// The content record the request is centered on.
    pub current_content: Option<ContentRecord>,
    /// The full result set of the request's ambient query (e.g. the current
    /// archive page); empty when the request carries none.
    pub queried_content: Vec<ContentRecord>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_queried_user(mut self, user: UserRecord) -> Self {
        self.queried_user = Some(user);
        self
    }

    pub fn with_current_content(mut self, content: ContentRecord) -> Self {
        self.current_content = Some(content);
        self
    }

    pub fn with_queried_content(mut self, content: impl IntoIterator<Item = ContentRecord>) -> Self {
        self.queried_content = content.into_iter().collect();
        self
    }
}

/// Everything an entity needs to resolve further records: the two read
/// interfaces plus the request context. Entities hold this behind `Rc`.
pub struct ModelContext {
    pub content: Rc<dyn ContentStore>,
    pub users: Rc<dyn UserDirectory>,
    pub request: RequestContext,
}

impl ModelContext {
    pub fn new(content: Rc<dyn ContentStore>, users: Rc<dyn UserDirectory>) -> Self {
        Self {
            content,
            users,
            request: RequestContext::default(),
        }
    }

    pub fn with_request(
        content: Rc<dyn ContentStore>,
        users: Rc<dyn UserDirectory>,
        request: RequestContext,
    ) -> Self {
        Self {
            content,
            users,
            request,
        }
    }
}

impl core::fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelContext")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
