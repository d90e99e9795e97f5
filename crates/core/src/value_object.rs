//! Marker vocabulary shared by every domain value object.

/// A value object is compared by value, never by identity.
pub trait ValueObject: Clone + PartialEq {}
