//! Stored records with a stable identity.

/// A record identified by its storage key rather than by its contents.
///
/// Two price records with the same id are the same row even when their
/// windows or amounts differ; nothing in the resolver compares them by id
/// except as the last tie-break.
pub trait Entity {
    type Id: Copy + Ord + core::fmt::Display;

    fn id(&self) -> Self::Id;
}
