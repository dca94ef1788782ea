//! Authors domain module.
//!
//! Wraps raw user-directory records into [`Author`] entities with memoized
//! accessors and the three-step default-identity resolution.

pub mod author;

pub use author::{Author, AuthorSource};
