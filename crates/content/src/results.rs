//! Query result wrapper: entities + the engine's pagination metadata.

use corpus_store::QueryContext;

use crate::content::Content;

/// An ordered sequence of [`Content`] entities paired with the pagination
/// metadata the query engine produced. Immutable once constructed; the
/// sequence order is the engine's return order.
#[derive(Debug, Clone)]
pub struct QueryResults {
    items: Vec<Content>,
    context: QueryContext,
}

impl QueryResults {
    pub fn new(items: Vec<Content>, context: QueryContext) -> Self {
        Self { items, context }
    }

    pub fn items(&self) -> &[Content] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Content> {
        self.items
    }

    pub fn context(&self) -> QueryContext {
        self.context
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&Content> {
        self.items.first()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Content> {
        self.items.iter()
    }
}

impl IntoIterator for QueryResults {
    type Item = Content;
    type IntoIter = std::vec::IntoIter<Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResults {
    type Item = &'a Content;
    type IntoIter = core::slice::Iter<'a, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
