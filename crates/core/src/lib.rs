//! `corpus-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage concerns):
//! typed identifiers, the entity contract, the domain error model, and the
//! per-instance attribute memoization cache shared by every entity type.

pub mod attributes;
pub mod entity;
pub mod error;
pub mod id;

pub use attributes::AttributeCache;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ContentId, UserId};
