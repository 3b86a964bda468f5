//! Records identified by id rather than by their contents.

/// A record whose identity is its id.
///
/// A cart line's product snapshot and the catalog's current product are the same
/// product when their ids match, whatever their price or stock now say.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Position of the record with `id`, if any.
pub fn position_by_id<E: Entity>(records: &[E], id: &E::Id) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}
