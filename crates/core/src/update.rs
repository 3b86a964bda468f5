//! State updates: either a replacement value or a function of the previous value.

/// A requested change to a piece of state.
///
/// Callers either hand over the next value directly, or describe it relative to the
/// current one (e.g. "append this product to whatever list is stored now").
pub enum Update<'a, T> {
    /// Replace the current value.
    Value(T),
    /// Derive the next value from the current one.
    Compute(Box<dyn FnOnce(&T) -> T + 'a>),
}

impl<'a, T> Update<'a, T> {
    /// Build an update computed from the previous value.
    pub fn compute(f: impl FnOnce(&T) -> T + 'a) -> Self {
        Self::Compute(Box::new(f))
    }

    /// Resolve the update against the current value.
    pub fn apply(self, previous: &T) -> T {
        match self {
            Update::Value(next) => next,
            Update::Compute(f) => f(previous),
        }
    }
}

impl<T> From<T> for Update<'_, T> {
    fn from(value: T) -> Self {
        Update::Value(value)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Update<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Update::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Update::Compute(_) => f.write_str("Compute(..)"),
        }
    }
}
