//! Document store: the persistence collaborator behind every repository.
//!
//! Documents are JSON values addressed by `(collection, key)`. The store
//! guarantees per-document atomicity only; nothing here spans documents.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`: Postgres in production,
//! the in-memory map in tests and local runs without `DATABASE_URL`.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

#[cfg(test)]
pub mod failing;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A stored document together with the key it lives under.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub key: String,
    pub body: Value,
}

/// Top-level field equality. The only predicate the repositories need.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

/// Descending order on one top-level field, largest first. Ties fall back to
/// ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
}

/// A collection scan. Without `order_by`, results come back in ascending key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub order_by: Option<OrderBy>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter = Some(Filter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn order_by_desc(mut self, field: &str) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
        });
        self
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError>;

    /// Writes the document, replacing whatever was stored under the key.
    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError>;

    /// Writes the document only if the key is free. Returns `false` and leaves
    /// the existing document untouched otherwise.
    async fn create(&self, collection: &str, key: &str, value: Value) -> Result<bool, StoreError>;

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError>;
}

pub async fn get_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(collection, key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub async fn set_as<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    key: &str,
    document: &T,
) -> Result<(), StoreError> {
    store
        .set(collection, key, serde_json::to_value(document)?)
        .await
}

pub async fn create_as<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    key: &str,
    document: &T,
) -> Result<bool, StoreError> {
    store
        .create(collection, key, serde_json::to_value(document)?)
        .await
}

pub async fn query_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    query: &Query,
) -> Result<Vec<T>, StoreError> {
    store
        .query(collection, query)
        .await?
        .into_iter()
        .map(|doc| serde_json::from_value(doc.body).map_err(StoreError::from))
        .collect()
}

/// Orders two field values the way the stores sort documents: missing first,
/// then numbers numerically, strings lexically, booleans false-before-true.
/// Mixed or structured values compare equal.
pub(crate) fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
