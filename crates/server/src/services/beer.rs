use std::sync::Arc;

use async_trait::async_trait;
use brewery_core::domain::beer::{BeerDto, BeerId};
use brewery_core::domain::{Resource, ResourceId};
use brewery_core::errors::ApplicationError;
use brewery_core::identity::IdGenerator;
use brewery_db::ResourceRepository;
use tracing::debug;

use super::ResourceService;

/// v1 beer service: the style is stored exactly as the caller sent it.
pub struct BeerService {
    repository: Arc<dyn ResourceRepository<BeerDto>>,
    ids: Arc<dyn IdGenerator>,
}

impl BeerService {
    pub fn new(
        repository: Arc<dyn ResourceRepository<BeerDto>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repository, ids }
    }
}

#[async_trait]
impl ResourceService for BeerService {
    type Resource = BeerDto;

    async fn get_by_id(&self, id: BeerId) -> Result<BeerDto, ApplicationError> {
        match self.repository.find_by_id(&id).await? {
            Some(beer) => Ok(beer),
            None => {
                debug!(event_name = "brewery.beer.miss", resource_id = %id, "beer not found");
                Err(ApplicationError::not_found(BeerDto::KIND, id.as_uuid()))
            }
        }
    }

    async fn save_new(&self, beer: BeerDto) -> Result<BeerDto, ApplicationError> {
        let id = BeerId(self.ids.new_id());
        let beer = BeerDto { id: Some(id), ..beer };

        self.repository.insert(beer.clone()).await?;
        debug!(
            event_name = "brewery.beer.created",
            resource_id = %id,
            beer_style = ?beer.beer_style,
            "saved new beer"
        );
        Ok(beer)
    }

    async fn update(&self, id: BeerId, beer: BeerDto) -> Result<(), ApplicationError> {
        let beer = BeerDto { id: Some(id), ..beer };

        if !self.repository.replace(beer).await? {
            return Err(ApplicationError::not_found(BeerDto::KIND, id.as_uuid()));
        }
        debug!(event_name = "brewery.beer.updated", resource_id = %id, "updated beer");
        Ok(())
    }

    async fn delete_by_id(&self, id: BeerId) -> Result<(), ApplicationError> {
        if !self.repository.delete(&id).await? {
            return Err(ApplicationError::not_found(BeerDto::KIND, id.as_uuid()));
        }
        debug!(event_name = "brewery.beer.deleted", resource_id = %id, "deleted beer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use brewery_core::domain::beer::{BeerDto, BeerId};
    use brewery_core::errors::ApplicationError;
    use brewery_core::identity::RandomIdGenerator;
    use brewery_db::InMemoryRepository;
    use uuid::Uuid;

    use super::BeerService;
    use crate::services::testing::SequentialIds;
    use crate::services::ResourceService;

    fn service() -> BeerService {
        BeerService::new(
            Arc::new(InMemoryRepository::<BeerDto>::new()),
            Arc::new(SequentialIds::default()),
        )
    }

    fn valid_beer() -> BeerDto {
        BeerDto {
            id: Some(BeerId(Uuid::new_v4())),
            beer_name: Some("Beer1".to_string()),
            beer_style: Some("PALE_ALE".to_string()),
            upc: Some(123_456_789_012),
        }
    }

    #[tokio::test]
    async fn save_new_discards_caller_id_and_keeps_fields() {
        let service = service();
        let request = valid_beer();

        let saved = service.save_new(request.clone()).await.expect("save beer");

        assert_eq!(saved.id, Some(BeerId(SequentialIds::nth(1))));
        assert_ne!(saved.id, request.id);
        assert_eq!(saved.beer_name.as_deref(), Some("Beer1"));
        assert_eq!(saved.beer_style.as_deref(), Some("PALE_ALE"));
        assert_eq!(saved.upc, Some(123_456_789_012));
    }

    #[tokio::test]
    async fn saved_beer_can_be_read_back() {
        let service = service();
        let saved = service.save_new(valid_beer()).await.expect("save beer");

        let found = service.get_by_id(saved.id.expect("generated id")).await.expect("get beer");

        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = service();
        let id = BeerId(Uuid::new_v4());

        let error = service.get_by_id(id).await.expect_err("nothing was created");

        assert_eq!(error, ApplicationError::NotFound { kind: "beer", id: id.0 });
    }

    #[tokio::test]
    async fn update_replaces_every_field_but_the_id() {
        let service = service();
        let saved = service.save_new(valid_beer()).await.expect("save beer");
        let id = saved.id.expect("generated id");
        let replacement = BeerDto {
            id: Some(BeerId(Uuid::new_v4())),
            beer_name: Some("Beer2".to_string()),
            beer_style: Some("Imperial Stout".to_string()),
            upc: Some(987_654_321),
        };

        service.update(id, replacement.clone()).await.expect("update beer");
        let found = service.get_by_id(id).await.expect("get beer");

        assert_eq!(found, BeerDto { id: Some(id), ..replacement });
    }

    #[tokio::test]
    async fn update_with_absent_fields_clears_them() {
        let service = service();
        let id = service.save_new(valid_beer()).await.expect("save beer").id.expect("id");

        service
            .update(id, BeerDto { beer_name: Some("Renamed".to_string()), ..BeerDto::default() })
            .await
            .expect("update beer");
        let found = service.get_by_id(id).await.expect("get beer");

        assert_eq!(
            found,
            BeerDto { id: Some(id), beer_name: Some("Renamed".to_string()), ..BeerDto::default() }
        );
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = service();

        let error = service
            .update(BeerId(Uuid::new_v4()), valid_beer())
            .await
            .expect_err("nothing to update");

        assert!(matches!(error, ApplicationError::NotFound { kind: "beer", .. }));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found_and_repeat_delete_fails() {
        let service = service();
        let id = service.save_new(valid_beer()).await.expect("save beer").id.expect("id");

        service.delete_by_id(id).await.expect("delete beer");

        assert!(matches!(
            service.get_by_id(id).await,
            Err(ApplicationError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete_by_id(id).await,
            Err(ApplicationError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let service = Arc::new(BeerService::new(
            Arc::new(InMemoryRepository::<BeerDto>::new()),
            Arc::new(RandomIdGenerator),
        ));

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.save_new(valid_beer()).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let saved = handle.await.expect("task panicked").expect("save beer");
            assert!(ids.insert(saved.id.expect("generated id")));
        }
        assert_eq!(ids.len(), 32);
    }
}
