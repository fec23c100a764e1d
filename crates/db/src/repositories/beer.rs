use brewery_core::domain::beer::{BeerDto, BeerId};
use sqlx::Row;

use super::{decode_uuid, require_id, RepositoryError, ResourceRepository};
use crate::DbPool;

pub struct SqlBeerRepository {
    pool: DbPool,
}

impl SqlBeerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_beer(row: &sqlx::sqlite::SqliteRow) -> Result<BeerDto, RepositoryError> {
    let id: String = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let beer_name: Option<String> =
        row.try_get("beer_name").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let beer_style: Option<String> =
        row.try_get("beer_style").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let upc: Option<i64> =
        row.try_get("upc").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    Ok(BeerDto { id: Some(BeerId(decode_uuid(&id)?)), beer_name, beer_style, upc })
}

#[async_trait::async_trait]
impl ResourceRepository<BeerDto> for SqlBeerRepository {
    async fn find_by_id(&self, id: &BeerId) -> Result<Option<BeerDto>, RepositoryError> {
        let row = sqlx::query("SELECT id, beer_name, beer_style, upc FROM beer_v1 WHERE id = ?")
            .bind(id.0.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_beer).transpose()
    }

    async fn insert(&self, beer: BeerDto) -> Result<(), RepositoryError> {
        let id = require_id(&beer)?;
        sqlx::query("INSERT INTO beer_v1 (id, beer_name, beer_style, upc) VALUES (?, ?, ?, ?)")
            .bind(id.0.to_string())
            .bind(&beer.beer_name)
            .bind(&beer.beer_style)
            .bind(beer.upc)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn replace(&self, beer: BeerDto) -> Result<bool, RepositoryError> {
        let id = require_id(&beer)?;
        let result =
            sqlx::query("UPDATE beer_v1 SET beer_name = ?, beer_style = ?, upc = ? WHERE id = ?")
                .bind(&beer.beer_name)
                .bind(&beer.beer_style)
                .bind(beer.upc)
                .bind(id.0.to_string())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &BeerId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM beer_v1 WHERE id = ?")
            .bind(id.0.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
