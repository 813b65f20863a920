//! Core traits for document representation and serialization.
//!
//! Every stored type implements [`Document`]; [`DocumentExt`] is implemented for all of
//! them and handles the conversion to and from BSON documents.

use bson::{
    Document as BsonDocument,
    de::deserialize_from_document,
    ser::serialize_to_document,
};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Core trait that all documents stored in a collection must implement.
///
/// The identifier is assigned by the store on insertion and is serialized under the
/// `_id` key, so implementers rename their id field accordingly.
///
/// # Example
///
/// ```ignore
/// use docserve_core::document::Document;
/// use bson::oid::ObjectId;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct User {
///     #[serde(rename = "_id")]
///     pub id: ObjectId,
///     pub email: String,
/// }
///
/// impl Document for User {
///     fn collection_name() -> &'static str {
///         "users"
///     }
/// }
/// ```
pub trait Document: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns the name of the collection this document belongs to.
    fn collection_name() -> &'static str;
}

/// Extension trait providing BSON conversion for documents.
pub trait DocumentExt: Document {
    /// Converts this document to a BSON document for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_document(&self) -> StoreResult<BsonDocument>;

    /// Creates a document from a stored BSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_document(document: BsonDocument) -> StoreResult<Self>;
}

impl<D: Document> DocumentExt for D {
    fn to_document(&self) -> StoreResult<BsonDocument> {
        Ok(serialize_to_document(self)?)
    }

    fn from_document(document: BsonDocument) -> StoreResult<Self> {
        Ok(deserialize_from_document(document)?)
    }
}
