//! Marker vocabulary shared by every domain entity.

/// An entity has a stable identity distinct from its attributes.
pub trait Entity {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
}
