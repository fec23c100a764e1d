use std::collections::HashMap;

use brewery_core::domain::Resource;
use tokio::sync::RwLock;

use super::{require_id, RepositoryError, ResourceRepository};

pub struct InMemoryRepository<R: Resource> {
    records: RwLock<HashMap<R::Id, R>>,
}

impl<R: Resource> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self { records: RwLock::new(HashMap::new()) }
    }
}

impl<R: Resource> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryRepository<R> {
    async fn find_by_id(&self, id: &R::Id) -> Result<Option<R>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn insert(&self, resource: R) -> Result<(), RepositoryError> {
        let id = require_id(&resource)?;
        let mut records = self.records.write().await;
        records.insert(id, resource);
        Ok(())
    }

    async fn replace(&self, resource: R) -> Result<bool, RepositoryError> {
        let id = require_id(&resource)?;
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(stored) => {
                *stored = resource;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &R::Id) -> Result<bool, RepositoryError> {
        let mut records = self.records.write().await;
        Ok(records.remove(id).is_some())
    }
}
