use async_trait::async_trait;
use brewery_core::domain::Resource;
use brewery_core::errors::ApplicationError;
use thiserror::Error;
use uuid::Uuid;

pub mod beer;
pub mod beer_v2;
pub mod customer;
pub mod memory;

pub use beer::SqlBeerRepository;
pub use beer_v2::SqlBeerV2Repository;
pub use customer::SqlCustomerRepository;
pub use memory::InMemoryRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("{kind} record cannot be stored without an id")]
    MissingId { kind: &'static str },
}

impl From<RepositoryError> for ApplicationError {
    fn from(value: RepositoryError) -> Self {
        ApplicationError::Persistence(value.to_string())
    }
}

/// Storage collaborator behind a resource service, keyed by the resource id.
///
/// Implementations own concurrency control for their records.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, RepositoryError>;

    /// Stores a record that already carries its id.
    async fn insert(&self, resource: R) -> Result<(), RepositoryError>;

    /// Overwrites the stored record with the same id. Returns `false` when no
    /// such record exists.
    async fn replace(&self, resource: R) -> Result<bool, RepositoryError>;

    /// Returns `false` when no record with `id` exists.
    async fn delete(&self, id: &R::Id) -> Result<bool, RepositoryError>;
}

pub(crate) fn require_id<R: Resource>(resource: &R) -> Result<R::Id, RepositoryError> {
    resource.id().ok_or(RepositoryError::MissingId { kind: R::KIND })
}

pub(crate) fn decode_uuid(value: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(value)
        .map_err(|e| RepositoryError::Decode(format!("invalid id `{value}`: {e}")))
}
