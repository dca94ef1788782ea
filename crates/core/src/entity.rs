//! Entity trait: identity + continuity across reads.

/// Entity marker + minimal interface.
///
/// Entities wrap exactly one raw record and compare by identifier, never by
/// reference: two wrappers around the same record are the same entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
