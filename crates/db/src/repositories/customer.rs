use brewery_core::domain::customer::{CustomerDto, CustomerId};
use sqlx::Row;

use super::{decode_uuid, require_id, RepositoryError, ResourceRepository};
use crate::DbPool;

pub struct SqlCustomerRepository {
    pool: DbPool,
}

impl SqlCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_customer(row: &sqlx::sqlite::SqliteRow) -> Result<CustomerDto, RepositoryError> {
    let id: String = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let name: Option<String> =
        row.try_get("name").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    Ok(CustomerDto { id: Some(CustomerId(decode_uuid(&id)?)), name })
}

#[async_trait::async_trait]
impl ResourceRepository<CustomerDto> for SqlCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<CustomerDto>, RepositoryError> {
        let row = sqlx::query("SELECT id, name FROM customer WHERE id = ?")
            .bind(id.0.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_customer).transpose()
    }

    async fn insert(&self, customer: CustomerDto) -> Result<(), RepositoryError> {
        let id = require_id(&customer)?;
        sqlx::query("INSERT INTO customer (id, name) VALUES (?, ?)")
            .bind(id.0.to_string())
            .bind(&customer.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn replace(&self, customer: CustomerDto) -> Result<bool, RepositoryError> {
        let id = require_id(&customer)?;
        let result = sqlx::query("UPDATE customer SET name = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(id.0.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &CustomerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id.0.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
