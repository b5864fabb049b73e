use crate::config::Config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(config: &Config) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database_url())
        .await?;

    Ok(pool)
}

/// Reconcile the schema before serving traffic. Idempotent; runs once at
/// startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weather (
            id BIGSERIAL PRIMARY KEY,
            temperature DOUBLE PRECISION,
            humidity DOUBLE PRECISION,
            datetime TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
