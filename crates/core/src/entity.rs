//! Entity trait: identity + continuity across state changes.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Index a fetched snapshot by identifier.
///
/// When the snapshot contains duplicate identifiers the last record wins, which
/// matches how a re-fetch overwrites an earlier row.
pub fn index_by_id<E, I>(items: I) -> HashMap<E::Id, E>
where
    E: Entity,
    I: IntoIterator<Item = E>,
{
    items
        .into_iter()
        .map(|item| (item.id().clone(), item))
        .collect()
}

/// Returns `items` without the entity identified by `id`.
///
/// Removing an absent id is a no-op.
pub fn without_id<E>(items: &[E], id: &E::Id) -> Vec<E>
where
    E: Entity + Clone,
{
    items.iter().filter(|item| item.id() != id).cloned().collect()
}
