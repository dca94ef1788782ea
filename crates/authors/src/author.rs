//! The Author entity.

use std::rc::Rc;

use serde_json::Value;
use tracing::trace;

use corpus_core::{AttributeCache, DomainError, DomainResult, Entity, UserId};
use corpus_store::{ModelContext, UserQuery, UserRecord};

/// What the caller hands to [`Author::resolve`]: a bare id to look up, or an
/// identity object that is already resolved.
#[derive(Debug, Clone)]
pub enum AuthorSource {
    Id(UserId),
    Record(UserRecord),
}

impl From<UserId> for AuthorSource {
    fn from(id: UserId) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for AuthorSource {
    fn from(id: u64) -> Self {
        Self::Id(UserId::new(id))
    }
}

impl From<UserRecord> for AuthorSource {
    fn from(record: UserRecord) -> Self {
        Self::Record(record)
    }
}

/// A user-directory record wrapped with memoized accessors.
///
/// Construction resolves the identity in priority order: an explicit source
/// from the caller, then the request's queried identity object, then the
/// current content entity's declared author. Cloning shares the attribute
/// cache; clones are the same instance.
#[derive(Clone)]
pub struct Author {
    ctx: Rc<ModelContext>,
    record: UserRecord,
    attributes: AttributeCache,
}

impl Author {
    /// Resolve an author from an explicit source or the request context.
    ///
    /// Fails with [`DomainError::NotFound`] when an explicit id is unknown to
    /// the directory, or when no source yields a usable identity.
    pub fn resolve(ctx: Rc<ModelContext>, source: Option<AuthorSource>) -> DomainResult<Self> {
        let record = match source {
            Some(AuthorSource::Record(record)) => record,
            Some(AuthorSource::Id(id)) => Self::fetch(&ctx, id)?,
            None => {
                if let Some(user) = ctx.request.queried_user.clone() {
                    trace!(id = %user.id, "author resolved from queried identity");
                    user
                } else if let Some(content) = &ctx.request.current_content {
                    let id = content.author;
                    trace!(%id, "author resolved from current content");
                    Self::fetch(&ctx, id)?
                } else {
                    return Err(DomainError::not_found());
                }
            }
        };

        Ok(Self::from_record(ctx, record))
    }

    /// Resolve an author by id.
    pub fn find(ctx: Rc<ModelContext>, id: impl Into<UserId>) -> DomainResult<Self> {
        Self::resolve(ctx, Some(AuthorSource::Id(id.into())))
    }

    /// Wrap a pre-fetched user record.
    pub fn from_record(ctx: Rc<ModelContext>, record: UserRecord) -> Self {
        Self {
            ctx,
            record,
            attributes: AttributeCache::new(),
        }
    }

    fn fetch(ctx: &Rc<ModelContext>, id: UserId) -> DomainResult<UserRecord> {
        ctx.users
            .fetch_user_by_id(id)?
            .ok_or(DomainError::NotFound)
    }

    /// The wrapped raw user record.
    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn url(&self) -> Option<String> {
        self.attributes
            .get_or_compute("url", || self.record.url.clone())
    }

    /// Archive URL listing this author's content.
    pub fn posts_url(&self) -> String {
        self.attributes
            .get_or_compute("posts_url", || format!("/author/{}", self.record.login))
    }

    pub fn display_name(&self) -> String {
        self.attributes
            .get_or_compute("display_name", || self.record.display_name.clone())
    }

    pub fn nickname(&self) -> String {
        self.attributes
            .get_or_compute("nickname", || self.record.nickname.clone())
    }

    pub fn first_name(&self) -> String {
        self.attributes
            .get_or_compute("first_name", || self.record.first_name.clone())
    }

    pub fn last_name(&self) -> String {
        self.attributes
            .get_or_compute("last_name", || self.record.last_name.clone())
    }

    pub fn description(&self) -> String {
        self.attributes
            .get_or_compute("description", || self.record.description.clone())
    }

    pub fn email(&self) -> String {
        self.attributes
            .get_or_compute("email", || self.record.email.clone())
    }

    /// Avatar URL from the record, else a deterministic placeholder path.
    pub fn avatar_url(&self) -> String {
        self.attributes.get_or_compute("avatar_url", || {
            self.record
                .avatar
                .clone()
                .unwrap_or_else(|| format!("/avatars/{}.png", self.record.login))
        })
    }

    /// Dynamic read: cached attribute if it is a JSON primitive, else the
    /// declared computation for that name (computed and cached on the spot),
    /// else the same-named raw-record field, else no value.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes
            .json_value(name)
            .or_else(|| self.computed(name))
            .or_else(|| self.record.field(name))
    }

    /// Declared computations reachable by name.
    fn computed(&self, name: &str) -> Option<Value> {
        match name {
            "url" => self.url().map(Value::String),
            "posts_url" => Some(Value::String(self.posts_url())),
            "display_name" => Some(Value::String(self.display_name())),
            "nickname" => Some(Value::String(self.nickname())),
            "first_name" => Some(Value::String(self.first_name())),
            "last_name" => Some(Value::String(self.last_name())),
            "description" => Some(Value::String(self.description())),
            "email" => Some(Value::String(self.email())),
            "avatar_url" => Some(Value::String(self.avatar_url())),
            _ => None,
        }
    }

    /// Authors matching `query`, in the directory's id projection order.
    pub fn query(ctx: &Rc<ModelContext>, query: UserQuery) -> DomainResult<Vec<Self>> {
        let ids = ctx.users.fetch_user_ids(&query)?;
        ids.into_iter()
            .map(|id| Self::find(Rc::clone(ctx), id))
            .collect()
    }

    /// All authors: `query` with any result limit cleared.
    pub fn all(ctx: &Rc<ModelContext>, query: UserQuery) -> DomainResult<Vec<Self>> {
        Self::query(ctx, query.unlimited())
    }
}

impl Entity for Author {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.record.id
    }
}

impl core::fmt::Debug for Author {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.record.id)
            .field("login", &self.record.login)
            .field("attributes", &self.attributes)
            .finish()
    }
}
