//! Minimal backend and builders for exercising the core types without a real store.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document as StoredDocument,
    error::{StoreError, StoreResult},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Note {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub text: Option<String>,
}

impl StoredDocument for Note {
    fn collection_name() -> &'static str {
        "notes"
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NoteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Single-collection-agnostic store keeping `(collection, document)` pairs in a vector.
#[derive(Debug, Default)]
pub(crate) struct ScratchStore {
    documents: Mutex<Vec<(String, Document)>>,
    shutdowns: Arc<AtomicUsize>,
}

#[async_trait]
impl StoreBackend for ScratchStore {
    async fn insert_one(&self, mut document: Document, collection: &str) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        document.insert("_id", id);
        self.documents
            .lock()
            .unwrap()
            .push((collection.to_string(), document));
        Ok(id)
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == collection)
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        Ok(self
            .find(collection)
            .await?
            .into_iter()
            .find(|doc| doc.get_object_id("_id").ok() == Some(id)))
    }

    async fn update_one(&self, _id: ObjectId, _set: Document, _collection: &str) -> StoreResult<u64> {
        Ok(0)
    }

    async fn delete_one(&self, _id: ObjectId, _collection: &str) -> StoreResult<u64> {
        Ok(0)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn shutdown(&self) {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
    }
}

/// Builder that counts how many backends it has produced and can be told to fail.
#[derive(Debug, Clone, Default)]
pub(crate) struct CountingBuilder {
    pub builds: Arc<AtomicUsize>,
    pub shutdowns: Arc<AtomicUsize>,
    pub fail: bool,
}

#[async_trait]
impl StoreBackendBuilder for CountingBuilder {
    type Backend = ScratchStore;

    async fn build(&self) -> StoreResult<Self::Backend> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        if self.fail {
            return Err(StoreError::Connection("connection refused".to_string()));
        }

        Ok(ScratchStore {
            shutdowns: Arc::clone(&self.shutdowns),
            ..Default::default()
        })
    }
}
