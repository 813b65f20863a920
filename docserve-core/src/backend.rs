//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait exposes the single-document primitives a document driver
//! offers (insert-one, find, find-one, update-one, delete-one) over named collections.
//! Implementations are required to be thread-safe (`Send + Sync`) and are shared by every
//! in-flight request, so any pooling or serialization is the backend's own concern.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances from configuration
//!
//! # Examples
//!
//! ```ignore
//! use docserve_core::backend::StoreBackend;
//! use bson::doc;
//!
//! let backend = MyBackendImpl::new();
//!
//! let id = backend.insert_one(doc! { "name": "Alice" }, "users").await?;
//! let found = backend.find_one(id, "users").await?;
//! assert!(found.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use bson::{Document, oid::ObjectId};
use std::{fmt::Debug, sync::Arc};

use crate::error::StoreResult;

/// Abstract interface for document storage backends.
///
/// # Error Handling
///
/// Operations return [`StoreResult<T>`](crate::error::StoreResult). Backend failures are
/// reported as [`StoreError::Backend`](crate::error::StoreError::Backend) and are never
/// retried by the caller.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts one document into a collection and returns the identifier the store assigned.
    ///
    /// Any `_id` already present in `document` is replaced. The collection is created
    /// automatically if it doesn't exist.
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<ObjectId>;

    /// Returns every document in a collection.
    ///
    /// No filtering or pagination is applied. Documents come back in the store's natural
    /// order, which is usually but not contractually insertion order. A missing collection
    /// yields an empty vector.
    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Retrieves the document with the given identifier, or `None` if nothing matches.
    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>>;

    /// Merges the fields of `set` into the document with the given identifier.
    ///
    /// Fields not named in `set` are left untouched. Returns the number of documents
    /// actually modified: `0` when nothing matches, when `set` is empty or when every
    /// field already holds the given value, otherwise `1`.
    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64>;

    /// Removes the document with the given identifier and returns the number of documents
    /// deleted (`0` or `1`). Deleting a missing document is not an error.
    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64>;

    /// Performs a round trip to the store to verify the connection is usable.
    async fn ping(&self) -> StoreResult<()>;

    /// Releases the connection resources held by the backend.
    ///
    /// Operations issued after shutdown may fail. Backends without resources to release
    /// keep the default no-op.
    async fn shutdown(&self) {}
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend + ?Sized,
{
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<ObjectId> {
        (**self).insert_one(document, collection).await
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        (**self).find(collection).await
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        (**self).find_one(id, collection).await
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        (**self).update_one(id, set, collection).await
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        (**self).delete_one(id, collection).await
    }

    async fn ping(&self) -> StoreResult<()> {
        (**self).ping().await
    }

    async fn shutdown(&self) {
        (**self).shutdown().await
    }
}

#[async_trait]
impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<ObjectId> {
        (**self).insert_one(document, collection).await
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        (**self).find(collection).await
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        (**self).find_one(id, collection).await
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        (**self).update_one(id, set, collection).await
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        (**self).delete_one(id, collection).await
    }

    async fn ping(&self) -> StoreResult<()> {
        (**self).ping().await
    }

    async fn shutdown(&self) {
        (**self).shutdown().await
    }
}

#[async_trait]
impl<B> StoreBackend for Arc<B>
where
    B: StoreBackend + ?Sized,
{
    async fn insert_one(&self, document: Document, collection: &str) -> StoreResult<ObjectId> {
        (**self).insert_one(document, collection).await
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        (**self).find(collection).await
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        (**self).find_one(id, collection).await
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        (**self).update_one(id, set, collection).await
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        (**self).delete_one(id, collection).await
    }

    async fn ping(&self) -> StoreResult<()> {
        (**self).ping().await
    }

    async fn shutdown(&self) {
        (**self).shutdown().await
    }
}

/// Factory for backends, typically holding a connection string and driver options.
///
/// `build` takes `&self` so that a failed attempt can be repeated with the same
/// configuration.
#[async_trait]
pub trait StoreBackendBuilder: Send + Sync + 'static {
    type Backend: StoreBackend + 'static;

    async fn build(&self) -> StoreResult<Self::Backend>;
}
