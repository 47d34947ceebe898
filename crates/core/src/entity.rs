//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The only capability a [`Repository`](crate::Repository) needs is a stable
/// identifier; everything else about an entity is domain-specific.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Human-readable entity kind, used in error messages (e.g. "patient").
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Entities with a mutable, non-negative stock quantity.
pub trait Stocked: Entity {
    fn quantity(&self) -> i64;

    /// Overwrite the quantity. Validation happens in the repository, not here.
    fn set_quantity(&mut self, quantity: i64);
}
