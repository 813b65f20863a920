//! In-memory storage implementation for document stores.
//!
//! Documents are kept as BSON documents, grouped by collection, behind async-safe
//! read-write locks. Each collection preserves insertion order.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;
use bson::{Document, oid::ObjectId};

use docserve_core::{
    error::StoreResult,
    backend::{StoreBackend, StoreBackendBuilder},
};

type CollectionList = Vec<(ObjectId, Document)>;
type StoreMap = HashMap<String, CollectionList>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be safely shared across async tasks. Multiple clones of the same instance
/// share the same underlying data.
///
/// # Performance
///
/// Lookups scan the collection (no indexing), which is fine for the small datasets
/// used in tests and development.
///
/// # Example
///
/// ```ignore
/// use docserve_memory::InMemoryStore;
/// use docserve_core::backend::StoreBackend;
/// use bson::doc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     let id = store.insert_one(doc! { "name": "Alice", "age": 30 }, "users").await?;
///     let modified = store.update_one(id, doc! { "age": 31 }, "users").await?;
///     assert_eq!(modified, 1);
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// The main storage map: collection_name -> [(document_id, document)]
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn insert_one(&self, mut document: Document, collection: &str) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        document.insert("_id", id);

        self.store
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id, document));

        Ok(id)
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(
            self.store
                .read()
                .await
                .get(collection)
                .map(|docs| docs.iter().map(|(_, doc)| doc.clone()).collect())
                .unwrap_or_default()
        )
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        let store = self.store.read().await;
        let documents = match store.get(collection) {
            Some(col) => col,
            None => return Ok(None),
        };

        Ok(
            documents
                .iter()
                .find(|(doc_id, _)| *doc_id == id)
                .map(|(_, doc)| doc.clone())
        )
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        let mut store = self.store.write().await;
        let document = match store
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|(doc_id, _)| *doc_id == id))
        {
            Some((_, doc)) => doc,
            None => return Ok(0),
        };

        // Matched documents whose fields already hold the values count as unmodified
        let mut modified = false;
        for (field, value) in set {
            if document.get(&field) != Some(&value) {
                document.insert(field, value);
                modified = true;
            }
        }

        Ok(modified as u64)
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        let mut store = self.store.write().await;
        let documents = match store.get_mut(collection) {
            Some(col) => col,
            None => return Ok(0),
        };

        match documents.iter().position(|(doc_id, _)| *doc_id == id) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docserve_memory::InMemoryStore;
/// use docserve_core::backend::StoreBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryStore::builder().build().await.unwrap();
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new, empty [`InMemoryStore`].
    async fn build(&self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}
