//! The [`Identifiable`] contract every managed entity type fulfils.

use std::fmt::{Debug, Display};

/// A domain object whose identity is defined solely by an optional key.
///
/// An absent id means the object has not been persisted yet. Two values are
/// the same record iff both ids are present and equal.
pub trait Identifiable {
    /// Key type, assigned by storage on first persistence.
    type Id: Copy + Ord + Debug + Display + Send + Sync + 'static;

    /// Type name used in error messages.
    const NAME: &'static str;

    /// The key, or `None` when not yet persisted.
    fn id(&self) -> Option<Self::Id>;

    /// Whether `self` and `other` denote the same stored record.
    fn same_record(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}
