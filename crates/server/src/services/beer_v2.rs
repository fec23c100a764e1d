use std::sync::Arc;

use async_trait::async_trait;
use brewery_core::domain::beer::BeerId;
use brewery_core::domain::beer_v2::BeerDtoV2;
use brewery_core::domain::{Resource, ResourceId};
use brewery_core::errors::ApplicationError;
use brewery_core::identity::IdGenerator;
use brewery_db::ResourceRepository;
use tracing::debug;

use super::ResourceService;

/// v2 beer service. A style, when present, is already constrained to
/// [`BeerStyle`](brewery_core::domain::beer_v2::BeerStyle) by the time a
/// request reaches it.
pub struct BeerServiceV2 {
    repository: Arc<dyn ResourceRepository<BeerDtoV2>>,
    ids: Arc<dyn IdGenerator>,
}

impl BeerServiceV2 {
    pub fn new(
        repository: Arc<dyn ResourceRepository<BeerDtoV2>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repository, ids }
    }

    fn missing(id: BeerId) -> ApplicationError {
        ApplicationError::not_found(BeerDtoV2::KIND, id.as_uuid())
    }
}

#[async_trait]
impl ResourceService for BeerServiceV2 {
    type Resource = BeerDtoV2;

    async fn get_by_id(&self, id: BeerId) -> Result<BeerDtoV2, ApplicationError> {
        self.repository.find_by_id(&id).await?.ok_or_else(|| {
            debug!(event_name = "brewery.beer_v2.miss", resource_id = %id, "v2 beer not found");
            Self::missing(id)
        })
    }

    async fn save_new(&self, beer: BeerDtoV2) -> Result<BeerDtoV2, ApplicationError> {
        let beer = beer.with_id(BeerId(self.ids.new_id()));

        self.repository.insert(beer.clone()).await?;
        debug!(
            event_name = "brewery.beer_v2.created",
            resource_id = ?beer.id,
            beer_style = ?beer.beer_style,
            "saved new v2 beer"
        );
        Ok(beer)
    }

    async fn update(&self, id: BeerId, beer: BeerDtoV2) -> Result<(), ApplicationError> {
        if !self.repository.replace(beer.with_id(id)).await? {
            return Err(Self::missing(id));
        }
        debug!(event_name = "brewery.beer_v2.updated", resource_id = %id, "updated v2 beer");
        Ok(())
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<(), ApplicationError> {
        if !self.repository.delete(&id).await? {
            return Err(Self::missing(id));
        }
        debug!(event_name = "brewery.beer_v2.deleted", resource_id = %id, "deleted v2 beer");
        Ok(())
    }
}
