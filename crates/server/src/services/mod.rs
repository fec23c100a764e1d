//! Resource services for the brewery API.
//!
//! Each service owns one resource representation and receives its storage
//! collaborator and id generator at construction. The v1 and v2 beer services
//! are independent: they share only the [`ResourceService`] contract, the
//! repository trait and the id generator.

use std::sync::Arc;

use async_trait::async_trait;
use brewery_core::domain::beer::BeerDto;
use brewery_core::domain::beer_v2::BeerDtoV2;
use brewery_core::domain::customer::CustomerDto;
use brewery_core::domain::Resource;
use brewery_core::errors::ApplicationError;
use brewery_core::identity::IdGenerator;
use brewery_db::{
    DbPool, InMemoryRepository, SqlBeerRepository, SqlBeerV2Repository, SqlCustomerRepository,
};

pub mod beer;
pub mod beer_v2;
pub mod customer;

pub use beer::BeerService;
pub use beer_v2::BeerServiceV2;
pub use customer::CustomerService;

/// Id type of the resource served by `S`.
pub type ResourceIdOf<S> = <<S as ResourceService>::Resource as Resource>::Id;

/// CRUD contract shared by every resource service.
#[async_trait]
pub trait ResourceService: Send + Sync + 'static {
    type Resource: Resource;

    async fn get_by_id(
        &self,
        id: <Self::Resource as Resource>::Id,
    ) -> Result<Self::Resource, ApplicationError>;

    /// Stores `resource` under a freshly generated id. Any caller-supplied id
    /// is discarded.
    async fn save_new(&self, resource: Self::Resource)
        -> Result<Self::Resource, ApplicationError>;

    /// Replaces every mutable field of the stored resource. The id in the
    /// body is ignored.
    async fn update(
        &self,
        id: <Self::Resource as Resource>::Id,
        resource: Self::Resource,
    ) -> Result<(), ApplicationError>;

    /// Deleting an id that does not exist, including one already deleted, is
    /// `NotFound`.
    async fn delete_by_id(
        &self,
        id: <Self::Resource as Resource>::Id,
    ) -> Result<(), ApplicationError>;
}

#[derive(Clone)]
pub struct Services {
    pub beer: Arc<BeerService>,
    pub beer_v2: Arc<BeerServiceV2>,
    pub customer: Arc<CustomerService>,
}

impl Services {
    pub fn in_memory(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            beer: Arc::new(BeerService::new(
                Arc::new(InMemoryRepository::<BeerDto>::new()),
                ids.clone(),
            )),
            beer_v2: Arc::new(BeerServiceV2::new(
                Arc::new(InMemoryRepository::<BeerDtoV2>::new()),
                ids.clone(),
            )),
            customer: Arc::new(CustomerService::new(
                Arc::new(InMemoryRepository::<CustomerDto>::new()),
                ids,
            )),
        }
    }

    pub fn sqlite(pool: DbPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            beer: Arc::new(BeerService::new(
                Arc::new(SqlBeerRepository::new(pool.clone())),
                ids.clone(),
            )),
            beer_v2: Arc::new(BeerServiceV2::new(
                Arc::new(SqlBeerV2Repository::new(pool.clone())),
                ids.clone(),
            )),
            customer: Arc::new(CustomerService::new(
                Arc::new(SqlCustomerRepository::new(pool)),
                ids,
            )),
        }
    }
}
