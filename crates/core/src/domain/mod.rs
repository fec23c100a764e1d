use std::fmt::{Debug, Display};
use std::hash::Hash;

use uuid::Uuid;

pub mod beer;
pub mod beer_v2;
pub mod customer;

/// Identifier of a stored resource. Every resource id wraps a UUID.
pub trait ResourceId: Copy + Debug + Display + Eq + Hash + Send + Sync + 'static {
    fn from_uuid(value: Uuid) -> Self;
    fn as_uuid(&self) -> Uuid;
}

/// A record addressable by id, exchanged with callers and held by a repository.
///
/// The id is `None` until the record has been created.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    type Id: ResourceId;

    /// Short resource name used in logs and error messages.
    const KIND: &'static str;

    fn id(&self) -> Option<Self::Id>;

    fn with_id(self, id: Self::Id) -> Self;
}
