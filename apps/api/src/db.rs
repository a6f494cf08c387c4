use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::store::postgres::DOCUMENTS_SCHEMA;

/// Creates a PostgreSQL connection pool and makes sure the document table exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::query(DOCUMENTS_SCHEMA).execute(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
