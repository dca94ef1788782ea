//! Content domain module.
//!
//! Wraps raw content-repository records into [`Content`] entities with
//! memoized accessors, hierarchy traversal over parent-pointer chains
//! (parent, children, ancestors, ancestry predicates), and the `query`/`all`
//! factories returning [`QueryResults`].

pub mod content;
pub mod results;

pub use content::{Content, ContentRef};
pub use results::QueryResults;
