//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// Identity is assigned by whoever persists the entity, so a freshly
/// deserialized instance may not carry one yet.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;
}
