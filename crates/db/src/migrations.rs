use sqlx::migrate::{MigrateError, Migrator};

use crate::DbPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

pub async fn run_pending(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

#[cfg(test)]
mod tests {
    use super::run_pending;
    use crate::connect_with_settings;

    const MANAGED_TABLES: &[&str] = &["beer_v1", "beer_v2", "customer"];

    #[tokio::test]
    async fn migrations_create_resource_tables_and_are_rerunnable() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");

        run_pending(&pool).await.expect("first migration run");
        run_pending(&pool).await.expect("second migration run is a no-op");

        for table in MANAGED_TABLES {
            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_one(&pool)
            .await
            .expect("query sqlite_master");
            assert_eq!(count, 1, "table `{table}` should exist after migrations");
        }

        pool.close().await;
    }

    #[tokio::test]
    async fn beer_v2_table_rejects_unknown_style() {
        let pool = connect_with_settings("sqlite::memory:", 1, 30).await.expect("connect");
        run_pending(&pool).await.expect("migrations");

        let result = sqlx::query(
            "INSERT INTO beer_v2 (id, beer_name, beer_style, upc)
             VALUES ('b-1', 'Beer1', 'BARLEYWINE', 1)",
        )
        .execute(&pool)
        .await;

        assert!(result.is_err());
        pool.close().await;
    }
}
