//! The Content entity and its hierarchy traversal.

use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, trace};

use corpus_authors::Author;
use corpus_core::{AttributeCache, ContentId, DomainError, DomainResult, Entity};
use corpus_store::{ContentQuery, ContentRecord, ModelContext, Thumbnail};

use crate::results::QueryResults;

/// Word budget for excerpts derived from the body.
const EXCERPT_WORDS: usize = 55;

/// Argument to the ancestry predicates: a bare id or an already-wrapped
/// entity, normalized to an id before comparison. Identity is always the id,
/// never the reference.
#[derive(Debug, Clone, Copy)]
pub enum ContentRef<'a> {
    Id(ContentId),
    Entity(&'a Content),
}

impl ContentRef<'_> {
    fn id(&self) -> ContentId {
        match self {
            Self::Id(id) => *id,
            Self::Entity(content) => content.id(),
        }
    }
}

impl From<ContentId> for ContentRef<'_> {
    fn from(id: ContentId) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for ContentRef<'_> {
    fn from(id: u64) -> Self {
        Self::Id(ContentId::new(id))
    }
}

impl<'a> From<&'a Content> for ContentRef<'a> {
    fn from(content: &'a Content) -> Self {
        Self::Entity(content)
    }
}

/// A content-repository record wrapped with memoized accessors and
/// parent-chain traversal.
///
/// The wrapped record never changes after construction; every computed
/// attribute is cached on first read for the lifetime of the instance.
/// Cloning shares the attribute cache; clones are the same instance.
#[derive(Clone)]
pub struct Content {
    ctx: Rc<ModelContext>,
    record: ContentRecord,
    attributes: AttributeCache,
}

impl Content {
    /// Content type assumed by queries that do not set one.
    pub const DEFAULT_KIND: &'static str = "post";

    /// Resolve a content entity by id.
    ///
    /// Fails with [`DomainError::NotFound`] when the repository has no record
    /// for `id`; an unresolvable identity is never swallowed.
    pub fn find(ctx: Rc<ModelContext>, id: impl Into<ContentId>) -> DomainResult<Self> {
        let id = id.into();
        let record = ctx
            .content
            .fetch_by_id(id)?
            .ok_or(DomainError::NotFound)?;
        Ok(Self::from_record(ctx, record))
    }

    /// Wrap a pre-fetched record.
    pub fn from_record(ctx: Rc<ModelContext>, record: ContentRecord) -> Self {
        Self {
            ctx,
            record,
            attributes: AttributeCache::new(),
        }
    }

    /// The content entity the current request designates, if any.
    pub fn current(ctx: Rc<ModelContext>) -> DomainResult<Self> {
        let record = ctx
            .request
            .current_content
            .clone()
            .ok_or(DomainError::NotFound)?;
        Ok(Self::from_record(ctx, record))
    }

    /// The result set of the request's ambient query, wrapped; empty when
    /// the request carries none.
    pub fn queried(ctx: &Rc<ModelContext>) -> Vec<Self> {
        ctx.request
            .queried_content
            .iter()
            .cloned()
            .map(|record| Self::from_record(Rc::clone(ctx), record))
            .collect()
    }

    /// The wrapped raw content record.
    pub fn record(&self) -> &ContentRecord {
        &self.record
    }

    pub fn kind(&self) -> &str {
        &self.record.kind
    }

    pub fn title(&self) -> String {
        self.attributes
            .get_or_compute("title", || self.record.title.clone())
    }

    pub fn slug(&self) -> String {
        self.attributes
            .get_or_compute("slug", || self.record.slug.clone())
    }

    pub fn permalink(&self) -> String {
        self.attributes.get_or_compute("permalink", || {
            format!("/{}/{}", self.record.kind, self.record.slug)
        })
    }

    pub fn body(&self) -> String {
        self.attributes
            .get_or_compute("body", || self.record.body.clone())
    }

    /// The explicit excerpt, else the first words of the body.
    pub fn excerpt(&self) -> String {
        self.attributes.get_or_compute("excerpt", || {
            self.record
                .excerpt
                .clone()
                .unwrap_or_else(|| trim_excerpt(&self.record.body))
        })
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.record.created_at
    }

    /// RFC 3339 timestamp, suitable for a `<time datetime=..>` attribute.
    pub fn datetime(&self) -> String {
        self.attributes
            .get_or_compute("datetime", || self.record.created_at.to_rfc3339())
    }

    /// The formatted date in the default format.
    pub fn date(&self) -> String {
        self.attributes.get_or_compute("date", || {
            self.record.created_at.format("%B %e, %Y").to_string()
        })
    }

    /// The formatted time in the default format.
    pub fn time(&self) -> String {
        self.attributes.get_or_compute("time", || {
            self.record.created_at.format("%H:%M").to_string()
        })
    }

    /// Custom-format variant of [`date`](Self::date)/[`time`](Self::time).
    /// Not memoized: the cache keys by attribute name, which would alias
    /// different formats.
    pub fn format_created_at(&self, format: &str) -> String {
        self.record.created_at.format(format).to_string()
    }

    pub fn thumbnail(&self) -> Option<Thumbnail> {
        self.attributes
            .get_or_compute("thumbnail", || self.record.thumbnail.clone())
    }

    pub fn has_thumbnail(&self) -> bool {
        self.attributes
            .get_or_compute("has_thumbnail", || self.record.thumbnail.is_some())
    }

    pub fn password_required(&self) -> bool {
        self.attributes
            .get_or_compute("password_required", || self.record.password.is_some())
    }

    /// The author entity declared by this record.
    pub fn author(&self) -> DomainResult<Author> {
        self.attributes.try_get_or_compute("author", || {
            Author::find(Rc::clone(&self.ctx), self.record.author)
        })
    }

    /// The parent entity, or `None` for a root node.
    ///
    /// A root node answers without any repository lookup. A parent id that
    /// resolves to no record is a hard [`DomainError::NotFound`].
    pub fn parent(&self) -> DomainResult<Option<Content>> {
        self.attributes.try_get_or_compute("parent", || {
            let Some(parent_id) = self.record.parent else {
                return Ok(None);
            };
            let record = self
                .ctx
                .content
                .fetch_by_id(parent_id)?
                .ok_or(DomainError::NotFound)?;
            Ok(Some(Self::from_record(Rc::clone(&self.ctx), record)))
        })
    }

    /// All ancestors of this entity, ordered root-first and excluding the
    /// entity itself. A root node yields an empty sequence without any
    /// repository lookup.
    ///
    /// The walk keeps a visited set: a repeated id means the repository
    /// returned a cyclic parent chain, reported as an invariant violation
    /// rather than looping forever.
    pub fn ancestors(&self) -> DomainResult<Vec<Content>> {
        self.attributes.try_get_or_compute("ancestors", || {
            if self.record.parent.is_none() {
                return Ok(Vec::new());
            }

            let mut seen: HashSet<ContentId> = HashSet::from([self.record.id]);
            let mut records = Vec::new();
            let mut next = self.record.parent;

            while let Some(id) = next {
                if !seen.insert(id) {
                    return Err(DomainError::invariant(format!(
                        "cyclic parent chain at content {id}"
                    )));
                }
                trace!(%id, "walking ancestor chain");
                let record = self
                    .ctx
                    .content
                    .fetch_by_id(id)?
                    .ok_or(DomainError::NotFound)?;
                next = record.parent;
                records.push(record);
            }

            debug!(id = %self.record.id, depth = records.len(), "resolved ancestor chain");
            // Collected child-to-root; the contract is root-first.
            records.reverse();
            Ok(records
                .into_iter()
                .map(|record| Self::from_record(Rc::clone(&self.ctx), record))
                .collect())
        })
    }

    /// Direct children of this entity, in the repository's return order.
    pub fn children(&self) -> DomainResult<Vec<Content>> {
        self.attributes.try_get_or_compute("children", || {
            let query = ContentQuery::new().with_parent(self.record.id).unpaged();
            Ok(Self::query(&self.ctx, query)?.into_items())
        })
    }

    /// Whether `other` appears in this entity's ancestor chain.
    pub fn is_descendant_of<'a>(&self, other: impl Into<ContentRef<'a>>) -> DomainResult<bool> {
        let other_id = other.into().id();
        Ok(self.ancestors()?.iter().any(|a| a.id() == other_id))
    }

    /// Whether this entity appears in `other`'s ancestor chain.
    ///
    /// Always computed from the ancestry of the node being questioned: a bare
    /// id is resolved into an entity first.
    pub fn is_ancestor_of<'a>(&self, other: impl Into<ContentRef<'a>>) -> DomainResult<bool> {
        let ancestors = match other.into() {
            ContentRef::Entity(content) => content.ancestors()?,
            ContentRef::Id(id) => Self::find(Rc::clone(&self.ctx), id)?.ancestors()?,
        };
        Ok(ancestors.iter().any(|a| a.id() == self.record.id))
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

    /// Declared computations reachable by name. Entity-valued attributes
    /// (author, parent, ancestors, children, thumbnail) are not
    /// JSON-representable and stay out of the dynamic read.
    fn computed(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(Value::String(self.title())),
            "slug" => Some(Value::String(self.slug())),
            "permalink" => Some(Value::String(self.permalink())),
            "body" => Some(Value::String(self.body())),
            "excerpt" => Some(Value::String(self.excerpt())),
            "datetime" => Some(Value::String(self.datetime())),
            "date" => Some(Value::String(self.date())),
            "time" => Some(Value::String(self.time())),
            "has_thumbnail" => Some(Value::Bool(self.has_thumbnail())),
            "password_required" => Some(Value::Bool(self.password_required())),
            _ => None,
        }
    }

    /// Execute a filtered query and wrap every returned record.
    ///
    /// The content type defaults to [`DEFAULT_KIND`](Self::DEFAULT_KIND) when
    /// unset; total-row counting stays disabled unless the caller asked for
    /// it.
    pub fn query(ctx: &Rc<ModelContext>, mut query: ContentQuery) -> DomainResult<QueryResults> {
        if query.kind.is_none() {
            query.kind = Some(Self::DEFAULT_KIND.to_string());
        }
        debug!(?query, "executing content query");
        let (records, context) = ctx.content.fetch_by_query(&query)?;
        let items = records
            .into_iter()
            .map(|record| Self::from_record(Rc::clone(ctx), record))
            .collect();
        Ok(QueryResults::new(items, context))
    }

    /// All matches: [`query`](Self::query) with pagination disabled.
    pub fn all(ctx: &Rc<ModelContext>, query: ContentQuery) -> DomainResult<QueryResults> {
        Self::query(ctx, query.unpaged())
    }
}

impl Entity for Content {
    type Id = ContentId;

    fn id(&self) -> ContentId {
        self.record.id
    }
}

impl core::fmt::Debug for Content {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Content")
            .field("id", &self.record.id)
            .field("kind", &self.record.kind)
            .field("attributes", &self.attributes)
            .finish()
    }
}

fn trim_excerpt(body: &str) -> String {
    let words: Vec<&str> = body.split_whitespace().collect();
    if words.len() <= EXCERPT_WORDS {
        words.join(" ")
    } else {
        format!("{}…", words[..EXCERPT_WORDS].join(" "))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use corpus_store::{
        ContentStore, InMemoryContentStore, InMemoryUserDirectory, RequestContext, UserDirectory,
        UserRecord,
    };

    fn ctx_over(store: Rc<InMemoryContentStore>) -> Rc<ModelContext> {
        let users = Rc::new(InMemoryUserDirectory::with_users([UserRecord::new(
            1u64, "alice",
        )]));
        Rc::new(ModelContext::new(store, users))
    }

    /// root(1) → a(2) → b(3) → c(4), plus sibling(5) under root.
    fn chain_store() -> Rc<InMemoryContentStore> {
        Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(1u64, "root").with_author(1u64),
            ContentRecord::new(2u64, "a").with_parent(1u64).with_author(1u64),
            ContentRecord::new(3u64, "b").with_parent(2u64).with_author(1u64),
            ContentRecord::new(4u64, "c").with_parent(3u64).with_author(1u64),
            ContentRecord::new(5u64, "sibling").with_parent(1u64).with_author(1u64),
        ]))
    }

    #[test]
    fn find_fails_hard_on_unknown_id() {
        let ctx = ctx_over(chain_store());
        let err = Content::find(ctx, 99u64).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn ancestors_are_root_first_excluding_self() {
        let ctx = ctx_over(chain_store());
        let c = Content::find(ctx, 4u64).unwrap();
        let ids: Vec<u64> = c
            .ancestors()
            .unwrap()
            .iter()
            .map(|a| a.id().as_u64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn root_node_short_circuits_without_lookups() {
        let store = chain_store();
        let ctx = ctx_over(Rc::clone(&store));
        let root = Content::find(ctx, 1u64).unwrap();
        let fetches_after_find = store.fetch_count();

        assert!(root.parent().unwrap().is_none());
        assert!(root.ancestors().unwrap().is_empty());
        assert_eq!(store.fetch_count(), fetches_after_find);
        assert_eq!(store.query_count(), 0);
    }

    #[test]
    fn ancestors_are_memoized_per_instance() {
        let store = chain_store();
        let ctx = ctx_over(Rc::clone(&store));
        let c = Content::find(ctx, 4u64).unwrap();
        let fetches_after_find = store.fetch_count();

        let first = c.ancestors().unwrap();
        let walk_cost = store.fetch_count() - fetches_after_find;
        assert_eq!(walk_cost, 3);

        let second = c.ancestors().unwrap();
        assert_eq!(store.fetch_count(), fetches_after_find + walk_cost);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn parent_is_memoized_and_resolves_by_id() {
        let store = chain_store();
        let ctx = ctx_over(Rc::clone(&store));
        let b = Content::find(ctx, 3u64).unwrap();
        let fetches_after_find = store.fetch_count();

        let parent = b.parent().unwrap().unwrap();
        assert_eq!(parent.id(), ContentId::new(2));
        let _ = b.parent().unwrap();
        assert_eq!(store.fetch_count(), fetches_after_find + 1);
    }

    #[test]
    fn dangling_parent_id_is_not_found() {
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(2u64, "orphan").with_parent(1u64),
        ]));
        let ctx = ctx_over(store);
        let orphan = Content::find(ctx, 2u64).unwrap();
        assert_eq!(orphan.parent().unwrap_err(), DomainError::NotFound);
        assert_eq!(orphan.ancestors().unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn failed_traversal_is_retried_after_the_record_appears() {
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(2u64, "orphan").with_parent(1u64),
        ]));
        let ctx = ctx_over(Rc::clone(&store));
        let orphan = Content::find(ctx, 2u64).unwrap();
        assert!(orphan.ancestors().is_err());

        // The failure was not cached; once the parent exists the walk works.
        store.insert(ContentRecord::new(1u64, "root"));
        let ids: Vec<u64> = orphan
            .ancestors()
            .unwrap()
            .iter()
            .map(|a| a.id().as_u64())
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn cyclic_parent_chain_is_reported_not_looped() {
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(1u64, "one").with_parent(2u64),
            ContentRecord::new(2u64, "two").with_parent(1u64),
        ]));
        let ctx = ctx_over(store);
        let one = Content::find(ctx, 1u64).unwrap();
        match one.ancestors().unwrap_err() {
            DomainError::InvariantViolation(_) => {}
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn children_are_direct_only_and_point_back_to_parent() {
        let ctx = ctx_over(chain_store());
        let root = Content::find(Rc::clone(&ctx), 1u64).unwrap();
        let children = root.children().unwrap();
        let ids: Vec<u64> = children.iter().map(|c| c.id().as_u64()).collect();
        // Direct children only: 3 and 4 are deeper in the tree.
        assert_eq!(ids, vec![2, 5]);

        for child in &children {
            let parent = child.parent().unwrap().unwrap();
            assert_eq!(parent.id(), root.id());
        }
    }

    #[test]
    fn ancestry_predicates_agree_and_reject_unrelated_nodes() {
        let ctx = ctx_over(chain_store());
        let root = Content::find(Rc::clone(&ctx), 1u64).unwrap();
        let c = Content::find(Rc::clone(&ctx), 4u64).unwrap();
        let sibling = Content::find(Rc::clone(&ctx), 5u64).unwrap();

        assert!(c.is_descendant_of(&root).unwrap());
        assert!(root.is_ancestor_of(&c).unwrap());
        assert!(!root.is_descendant_of(&c).unwrap());

        assert!(!c.is_descendant_of(&sibling).unwrap());
        assert!(!sibling.is_ancestor_of(&c).unwrap());
    }

    #[test]
    fn predicates_accept_bare_ids() {
        let ctx = ctx_over(chain_store());
        let c = Content::find(Rc::clone(&ctx), 4u64).unwrap();
        assert!(c.is_descendant_of(1u64).unwrap());
        let root = Content::find(ctx, 1u64).unwrap();
        assert!(root.is_ancestor_of(4u64).unwrap());
    }

    #[test]
    fn query_defaults_kind_and_leaves_totals_off() {
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(1u64, "a post"),
            ContentRecord::new(2u64, "a page").with_kind("page"),
        ]));
        let ctx = ctx_over(store);

        let results = Content::query(&ctx, ContentQuery::default()).unwrap();
        let ids: Vec<u64> = results.iter().map(|c| c.id().as_u64()).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(results.context().total, None);

        // Explicit settings survive the defaulting.
        let results = Content::query(
            &ctx,
            ContentQuery::new().with_kind("page").count_total(),
        )
        .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.context().total, Some(1));
    }

    #[test]
    fn all_disables_pagination() {
        let records = (1..=25u64).map(|i| ContentRecord::new(i, format!("post {i}")));
        let store = Rc::new(InMemoryContentStore::with_records(records));
        let ctx = ctx_over(store);

        let paged = Content::query(&ctx, ContentQuery::default()).unwrap();
        assert_eq!(paged.len(), 10);
        assert!(paged.context().has_more);

        let all = Content::all(&ctx, ContentQuery::default()).unwrap();
        assert_eq!(all.len(), 25);
        assert!(!all.context().has_more);
    }

    #[test]
    fn author_resolves_from_the_declared_author_id() {
        let ctx = ctx_over(chain_store());
        let post = Content::find(ctx, 2u64).unwrap();
        let author = post.author().unwrap();
        assert_eq!(author.id().as_u64(), 1);
        assert_eq!(author.display_name(), "alice");
    }

    #[test]
    fn current_requires_a_designated_content() {
        let store: Rc<dyn ContentStore> = chain_store();
        let users: Rc<dyn UserDirectory> = Rc::new(InMemoryUserDirectory::new());
        let bare = Rc::new(ModelContext::new(Rc::clone(&store), Rc::clone(&users)));
        assert_eq!(Content::current(bare).unwrap_err(), DomainError::NotFound);

        let request =
            RequestContext::new().with_current_content(ContentRecord::new(7u64, "current"));
        let ctx = Rc::new(ModelContext::with_request(store, users, request));
        let current = Content::current(ctx).unwrap();
        assert_eq!(current.id().as_u64(), 7);
    }

    #[test]
    fn queried_wraps_the_ambient_result_set_in_order() {
        let store: Rc<dyn ContentStore> = Rc::new(InMemoryContentStore::new());
        let users: Rc<dyn UserDirectory> = Rc::new(InMemoryUserDirectory::new());

        let bare = Rc::new(ModelContext::new(Rc::clone(&store), Rc::clone(&users)));
        assert!(Content::queried(&bare).is_empty());

        let request = RequestContext::new().with_queried_content([
            ContentRecord::new(1u64, "first"),
            ContentRecord::new(2u64, "second"),
        ]);
        let ctx = Rc::new(ModelContext::with_request(store, users, request));
        let ids: Vec<u64> = Content::queried(&ctx)
            .iter()
            .map(|c| c.id().as_u64())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn attribute_reads_cache_then_computation_then_record_then_nothing() {
        let store = Rc::new(InMemoryContentStore::with_records([ContentRecord::new(
            1u64, "Hello",
        )
        .with_extra("menu_order", Value::from(3))]));
        let ctx = ctx_over(store);
        let post = Content::find(ctx, 1u64).unwrap();

        // Declared computations answer by name without the accessor having run.
        assert_eq!(post.attribute("title"), Some(Value::String("Hello".into())));
        assert_eq!(
            post.attribute("permalink"),
            Some(Value::String("/post/content-1".into()))
        );
        // Undeclared names fall through to the raw record, then to nothing.
        assert_eq!(post.attribute("menu_order"), Some(Value::from(3)));
        assert_eq!(post.attribute("no_such_field"), None);
    }

    #[test]
    fn dynamic_read_invokes_uncomputed_declared_properties() {
        let long_body = (0..60).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(1u64, "derived").with_body(long_body),
        ]));
        let ctx = ctx_over(store);
        let post = Content::find(ctx, 1u64).unwrap();

        // No explicit excerpt on the record: the dynamic read must run the
        // derivation, not fall through to the absent raw field.
        let excerpt = post.attribute("excerpt").unwrap();
        let excerpt = excerpt.as_str().unwrap();
        assert!(excerpt.ends_with('…'));

        // The computation was cached by the dynamic read, and repeated reads
        // agree with the accessor.
        assert_eq!(post.attribute("excerpt"), Some(Value::String(excerpt.into())));
        assert_eq!(post.excerpt(), excerpt);
    }

    #[test]
    fn excerpt_prefers_the_explicit_one_and_trims_the_body() {
        let long_body = (0..60).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(1u64, "explicit").with_excerpt("short and sweet"),
            ContentRecord::new(2u64, "derived").with_body(long_body),
        ]));
        let ctx = ctx_over(store);

        let explicit = Content::find(Rc::clone(&ctx), 1u64).unwrap();
        assert_eq!(explicit.excerpt(), "short and sweet");

        let derived = Content::find(ctx, 2u64).unwrap();
        let excerpt = derived.excerpt();
        assert!(excerpt.ends_with('…'));
        assert_eq!(excerpt.split_whitespace().count(), EXCERPT_WORDS);
    }

    #[test]
    fn password_and_thumbnail_flags_reflect_the_record() {
        let store = Rc::new(InMemoryContentStore::with_records([
            ContentRecord::new(1u64, "locked").with_password("hunter2"),
            ContentRecord::new(2u64, "open").with_thumbnail(Thumbnail {
                url: "/img/2.jpg".into(),
                width: Some(640),
                height: Some(480),
            }),
        ]));
        let ctx = ctx_over(store);

        let locked = Content::find(Rc::clone(&ctx), 1u64).unwrap();
        assert!(locked.password_required());
        assert!(!locked.has_thumbnail());

        let open = Content::find(ctx, 2u64).unwrap();
        assert!(!open.password_required());
        assert_eq!(open.thumbnail().unwrap().url, "/img/2.jpg");
    }

    #[test]
    fn timestamps_format_consistently() {
        let mut record = ContentRecord::new(1u64, "dated");
        record.created_at = "2024-03-05T09:30:00Z".parse().unwrap();
        let store = Rc::new(InMemoryContentStore::with_records([record]));
        let ctx = ctx_over(store);
        let post = Content::find(ctx, 1u64).unwrap();

        assert_eq!(post.datetime(), "2024-03-05T09:30:00+00:00");
        assert_eq!(post.time(), "09:30");
        assert_eq!(post.format_created_at("%Y/%m/%d"), "2024/03/05");
    }
}
