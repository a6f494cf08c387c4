use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::store::{Document, DocumentStore, Query, StoreError};

/// Schema for the single JSONB document table. Applied at startup.
pub const DOCUMENTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection  TEXT        NOT NULL,
    key         TEXT        NOT NULL,
    body        JSONB       NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (collection, key)
)
"#;

/// Postgres-backed document store. Each call is one statement, so each
/// document write is atomic without an explicit transaction.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        let body: Option<Value> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = $1 AND key = $2")
                .bind(collection)
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(body)
    }

    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, key, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key)
            DO UPDATE SET body = EXCLUDED.body, updated_at = now()
            "#,
        )
        .bind(collection)
        .bind(key)
        .bind(Json(value))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, collection: &str, key: &str, value: Value) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO documents (collection, key, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key) DO NOTHING
            "#,
        )
        .bind(collection)
        .bind(key)
        .bind(Json(value))
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let sql = build_query_sql(query);

        let mut q = sqlx::query_as::<_, (String, Value)>(&sql).bind(collection);
        if let Some(filter) = &query.filter {
            q = q.bind(filter.field.as_str()).bind(Json(filter.value.clone()));
        }
        if let Some(order) = &query.order_by {
            q = q.bind(order.field.as_str());
        }

        let rows = q.fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|(key, body)| Document { key, body })
            .collect())
    }
}

/// Field names travel as bind parameters; nothing caller-supplied is spliced
/// into the statement.
fn build_query_sql(query: &Query) -> String {
    let mut sql = String::from("SELECT key, body FROM documents WHERE collection = $1");
    let mut param = 1;

    if query.filter.is_some() {
        sql.push_str(&format!(
            " AND body -> ${} = ${}",
            param + 1,
            param + 2
        ));
        param += 2;
    }

    match &query.order_by {
        Some(order) => sql.push_str(&format!(
            " ORDER BY body -> ${} DESC, key ASC",
            param + 1
        )),
        None => sql.push_str(" ORDER BY key ASC"),
    }

    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scan_orders_by_key() {
        assert_eq!(
            build_query_sql(&Query::new()),
            "SELECT key, body FROM documents WHERE collection = $1 ORDER BY key ASC"
        );
    }

    #[test]
    fn test_filter_and_order_number_params_in_bind_order() {
        let query = Query::new()
            .where_eq("userId", "u1")
            .order_by_desc("timestamp");
        assert_eq!(
            build_query_sql(&query),
            "SELECT key, body FROM documents WHERE collection = $1 \
             AND body -> $2 = $3 ORDER BY body -> $4 DESC, key ASC"
        );
    }

    #[test]
    fn test_order_without_filter_uses_second_param() {
        let query = Query::new().order_by_desc("title");
        assert_eq!(
            build_query_sql(&query),
            "SELECT key, body FROM documents WHERE collection = $1 ORDER BY body -> $2 DESC, key ASC"
        );
    }
}
