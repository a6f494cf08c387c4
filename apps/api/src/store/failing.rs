//! A store whose every call fails, for exercising the storage-fault paths.

use async_trait::async_trait;
use serde_json::Value;

use crate::store::{Document, DocumentStore, Query, StoreError};

pub struct FailingDocumentStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn get(&self, _collection: &str, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(unavailable())
    }

    async fn set(&self, _collection: &str, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn create(
        &self,
        _collection: &str,
        _key: &str,
        _value: Value,
    ) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn query(&self, _collection: &str, _query: &Query) -> Result<Vec<Document>, StoreError> {
        Err(unavailable())
    }
}
