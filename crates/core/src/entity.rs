//! Anything addressed by a storage-assigned identifier.

pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// The identifier assigned at creation. Never changes afterwards.
    fn id(&self) -> &Self::Id;
}
