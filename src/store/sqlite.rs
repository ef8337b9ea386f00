use super::traits::StrategyStore;
use crate::error::PersistenceError;
use crate::strategy::Strategy;
use chrono::Utc;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// SQLite-backed strategy store using the sqlx async pool.
///
/// History is append-only; every save inserts a new row and `load_latest`
/// returns the newest one.
pub struct SqliteStrategyStore {
    pool: SqlitePool,
}

impl SqliteStrategyStore {
    /// Create a new store with an existing pool and bootstrap the schema.
    pub async fn new(pool: SqlitePool) -> Result<Self, PersistenceError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS strategies (
                 id TEXT PRIMARY KEY,
                 brand_name TEXT NOT NULL,
                 body TEXT NOT NULL,
                 created_at TEXT NOT NULL
             )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_strategies_created
                 ON strategies(created_at)",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_strategy_row(row: &SqliteRow) -> Result<Strategy, PersistenceError> {
    let body: String = row.try_get("body")?;
    Ok(serde_json::from_str(&body)?)
}

impl StrategyStore for SqliteStrategyStore {
    fn save_strategy<'a>(
        &'a self,
        strategy: &'a Strategy,
    ) -> Pin<Box<dyn Future<Output = Result<(), PersistenceError>> + Send + 'a>> {
        Box::pin(async move {
            let id = Uuid::new_v4().to_string();
            let created_at = Utc::now().to_rfc3339();
            let body = serde_json::to_string(strategy)?;

            sqlx::query(
                "INSERT INTO strategies (id, brand_name, body, created_at)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(&id)
            .bind(&strategy.brand.name)
            .bind(&body)
            .bind(&created_at)
            .execute(&self.pool)
            .await?;

            tracing::info!(brand = %strategy.brand.name, "strategy saved");
            Ok(())
        })
    }

    fn load_latest<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Strategy>, PersistenceError>> + Send + 'a>>
    {
        Box::pin(async move {
            // rowid breaks ties when two saves land on the same timestamp.
            let row = sqlx::query(
                "SELECT body FROM strategies
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT 1",
            )
            .fetch_optional(&self.pool)
            .await?;

            row.as_ref().map(map_strategy_row).transpose()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SqliteStrategyStore, StrategyStore};
    use crate::strategy::model::sample_strategy;
    use sqlx::Row;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store() -> SqliteStrategyStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteStrategyStore::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = store().await;
        let strategy = sample_strategy();

        store.save_strategy(&strategy).await.unwrap();
        let loaded = store.load_latest().await.unwrap();

        assert_eq!(loaded, Some(strategy));
    }

    #[tokio::test]
    async fn load_latest_on_empty_table_is_none() {
        let store = store().await;
        assert_eq!(store.load_latest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn latest_row_wins_after_two_saves() {
        let store = store().await;

        let first = sample_strategy();
        store.save_strategy(&first).await.unwrap();

        let mut second = sample_strategy();
        second.brand.name = "Acme Rebrand".into();
        store.save_strategy(&second).await.unwrap();

        let loaded = store.load_latest().await.unwrap().unwrap();
        assert_eq!(loaded.brand.name, "Acme Rebrand");
    }

    #[tokio::test]
    async fn saves_are_append_only() {
        let store = store().await;
        store.save_strategy(&sample_strategy()).await.unwrap();
        store.save_strategy(&sample_strategy()).await.unwrap();

        let row = sqlx::query("SELECT COUNT(*) as cnt FROM strategies")
            .fetch_one(store.pool())
            .await
            .unwrap();
        let count: i64 = row.try_get("cnt").unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn brand_name_column_is_populated() {
        let store = store().await;
        store.save_strategy(&sample_strategy()).await.unwrap();

        let row = sqlx::query("SELECT brand_name FROM strategies")
            .fetch_one(store.pool())
            .await
            .unwrap();
        let brand: String = row.try_get("brand_name").unwrap();
        assert_eq!(brand, "Acme");
    }
}
