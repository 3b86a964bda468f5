//! Values compared by their attributes and replaced rather than mutated.

/// A value with no identity of its own.
///
/// Changing one means building a new value and swapping it in; the original is
/// never touched, so snapshots handed out earlier stay valid.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Copy of `self` with `change` applied.
    fn with_change(&self, change: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        change(&mut next);
        next
    }
}
