use std::sync::Arc;

use async_trait::async_trait;
use brewery_core::domain::customer::{CustomerDto, CustomerId};
use brewery_core::domain::{Resource, ResourceId};
use brewery_core::errors::ApplicationError;
use brewery_core::identity::IdGenerator;
use brewery_db::ResourceRepository;
use tracing::debug;

use super::ResourceService;

/// Customer service. Customers share the beer services' id and replace
/// semantics.
pub struct CustomerService {
    repository: Arc<dyn ResourceRepository<CustomerDto>>,
    ids: Arc<dyn IdGenerator>,
}

impl CustomerService {
    pub fn new(
        repository: Arc<dyn ResourceRepository<CustomerDto>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repository, ids }
    }
}

#[async_trait]
impl ResourceService for CustomerService {
    type Resource = CustomerDto;

    async fn get_by_id(&self, id: CustomerId) -> Result<CustomerDto, ApplicationError> {
        let customer = self.repository.find_by_id(&id).await?;
        customer.ok_or_else(|| {
            debug!(event_name = "brewery.customer.miss", resource_id = %id, "customer not found");
            ApplicationError::not_found(CustomerDto::KIND, id.as_uuid())
        })
    }

    async fn save_new(&self, customer: CustomerDto) -> Result<CustomerDto, ApplicationError> {
        let id = CustomerId(self.ids.new_id());
        let customer = CustomerDto { id: Some(id), name: customer.name };

        self.repository.insert(customer.clone()).await?;
        debug!(event_name = "brewery.customer.created", resource_id = %id, "saved new customer");
        Ok(customer)
    }

    async fn update(&self, id: CustomerId, customer: CustomerDto) -> Result<(), ApplicationError> {
        let replaced =
            self.repository.replace(CustomerDto { id: Some(id), name: customer.name }).await?;
        if !replaced {
            return Err(ApplicationError::not_found(CustomerDto::KIND, id.as_uuid()));
        }
        debug!(event_name = "brewery.customer.updated", resource_id = %id, "updated customer");
        Ok(())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), ApplicationError> {
        if !self.repository.delete(&id).await? {
            return Err(ApplicationError::not_found(CustomerDto::KIND, id.as_uuid()));
        }
        debug!(event_name = "brewery.customer.deleted", resource_id = %id, "deleted customer");
        Ok(())
    }
}
