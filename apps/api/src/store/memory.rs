use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{compare_fields, Document, DocumentStore, Query, StoreError};

/// Process-local document store. One lock guards the whole map, which gives
/// every single-document call the atomicity the repositories rely on.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<BTreeMap<(String, String), Value>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(&self, collection: &str, key: &str, value: Value) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        documents.insert((collection.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn create(&self, collection: &str, key: &str, value: Value) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        let slot = (collection.to_string(), key.to_string());
        if documents.contains_key(&slot) {
            return Ok(false);
        }
        documents.insert(slot, value);
        Ok(true)
    }

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.read().await;

        // BTreeMap iteration already yields ascending key order.
        let mut matched: Vec<Document> = documents
            .iter()
            .filter(|((c, _), _)| c == collection)
            .filter(|(_, body)| match &query.filter {
                Some(filter) => body.get(&filter.field) == Some(&filter.value),
                None => true,
            })
            .map(|((_, key), body)| Document {
                key: key.clone(),
                body: body.clone(),
            })
            .collect();

        if let Some(order) = &query.order_by {
            // Stable sort, so ties keep ascending key order.
            matched.sort_by(|a, b| {
                compare_fields(b.body.get(&order.field), a.body.get(&order.field))
            });
        }

        Ok(matched)
    }
}
