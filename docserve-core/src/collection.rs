//! Typed access to a single named collection.
//!
//! [`TypedCollection`] binds the collection named by a [`Document`] type to a backend and
//! converts between stored BSON documents and typed values, so callers never handle raw
//! BSON.
//!
//! # Example
//!
//! ```ignore
//! use docserve_core::collection::TypedCollection;
//!
//! let users = TypedCollection::<_, User>::new(&backend);
//! let id = users.insert(&NewUser { name: "Alice".into() }).await?;
//! let user = users.get(id).await?;
//! ```

use bson::oid::ObjectId;
use serde::Serialize;
use std::marker::PhantomData;

use crate::{
    backend::StoreBackend,
    document::{Document, DocumentExt},
    error::{StoreError, StoreResult},
};

/// A type-safe collection for a specific document type.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the backend reference
/// * `B` - The storage backend type
/// * `D` - The document type stored in this collection
#[derive(Debug)]
pub struct TypedCollection<'a, B: StoreBackend + ?Sized, D: Document> {
    name: &'static str,
    backend: &'a B,
    _marker: PhantomData<D>,
}

impl<'a, B: StoreBackend + ?Sized, D: Document> TypedCollection<'a, B, D> {
    /// Creates a typed collection over `backend`, named by `D::collection_name()`.
    pub fn new(backend: &'a B) -> Self {
        Self {
            name: D::collection_name(),
            backend,
            _marker: PhantomData,
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Inserts the serialized form of `data` and returns the assigned identifier.
    ///
    /// `data` is usually an input type without an identifier; its absent optional fields
    /// should be skipped during serialization so they are not stored as nulls.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if `data` does not serialize to a document,
    /// or the backend's error unchanged.
    pub async fn insert<T>(&self, data: &T) -> StoreResult<ObjectId>
    where
        T: Serialize,
    {
        self.backend
            .insert_one(bson::ser::serialize_to_document(data)?, self.name)
            .await
    }

    /// Returns every document in the collection.
    pub async fn list(&self) -> StoreResult<Vec<D>> {
        self.backend
            .find(self.name)
            .await?
            .into_iter()
            .map(D::from_document)
            .collect()
    }

    /// Retrieves the document with the given identifier.
    pub async fn get(&self, id: ObjectId) -> StoreResult<Option<D>> {
        self.backend
            .find_one(id, self.name)
            .await?
            .map(D::from_document)
            .transpose()
    }

    /// Merges the serialized fields of `data` into the matching document.
    ///
    /// # Returns
    ///
    /// The number of documents modified (`0` or `1`).
    pub async fn update<T>(&self, id: ObjectId, data: &T) -> StoreResult<u64>
    where
        T: Serialize,
    {
        let mut set = bson::ser::serialize_to_document(data)?;

        if set.remove("_id").is_some() {
            return Err(StoreError::InvalidDocument(
                "the _id field is immutable".to_string(),
            ));
        }

        self.backend
            .update_one(id, set, self.name)
            .await
    }

    /// Removes the document with the given identifier.
    ///
    /// # Returns
    ///
    /// The number of documents deleted (`0` or `1`).
    pub async fn delete(&self, id: ObjectId) -> StoreResult<u64> {
        self.backend
            .delete_one(id, self.name)
            .await
    }
}
