use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use bson::{Document, doc, oid::ObjectId};
use mongodb::{
    Client, Collection as MongoCollection,
    error::Error as MongoError,
    options::ClientOptions,
};
use docserve_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
};

fn backend_error(err: MongoError) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[derive(Debug, Clone)]
pub struct MongoDbStore {
    client: Client,
    database: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self, collection_name: &str) -> MongoCollection<Document> {
        self.client
            .database(&self.database)
            .collection(collection_name)
    }
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    async fn insert_one(&self, mut document: Document, collection: &str) -> StoreResult<ObjectId> {
        // Assign the id client-side so the returned value is always an ObjectId
        let id = ObjectId::new();
        document.insert("_id", id);

        self.get_collection(collection)
            .insert_one(document)
            .await
            .map_err(backend_error)?;

        Ok(id)
    }

    async fn find(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.get_collection(collection)
            .find(doc! {})
            .await
            .map_err(backend_error)?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(backend_error)
    }

    async fn find_one(&self, id: ObjectId, collection: &str) -> StoreResult<Option<Document>> {
        self.get_collection(collection)
            .find_one(doc! { "_id": id })
            .await
            .map_err(backend_error)
    }

    async fn update_one(&self, id: ObjectId, set: Document, collection: &str) -> StoreResult<u64> {
        // The server rejects an empty $set; nothing would be modified anyway
        if set.is_empty() {
            return Ok(0);
        }

        Ok(
            self.get_collection(collection)
                .update_one(doc! { "_id": id }, doc! { "$set": set })
                .await
                .map_err(backend_error)?
                .modified_count
        )
    }

    async fn delete_one(&self, id: ObjectId, collection: &str) -> StoreResult<u64> {
        Ok(
            self.get_collection(collection)
                .delete_one(doc! { "_id": id })
                .await
                .map_err(backend_error)?
                .deleted_count
        )
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    async fn shutdown(&self) {
        // Clones share the pool, so shutting one down closes it for all
        self.client.clone().shutdown().await;
    }
}

#[derive(Debug, Clone)]
pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
    connect_timeout: Option<Duration>,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
            connect_timeout: None,
        }
    }

    /// Bounds both the TCP connect and the server selection performed by the driver.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoDbStoreBuilder {
    type Backend = MongoDbStore;

    async fn build(&self) -> StoreResult<Self::Backend> {
        let mut options = ClientOptions::parse(&self.dsn)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        if let Some(timeout) = self.connect_timeout {
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
        }

        tracing::debug!(database = %self.database, "Opening MongoDB client");

        Ok(MongoDbStore::new(
            Client::with_options(options)
                .map_err(|e| StoreError::Connection(e.to_string()))?,
            self.database.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_connection_string_is_a_connection_error() {
        let err = MongoDbStore::builder("definitely-not-a-uri", "test")
            .build()
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Connection(_)));
    }

    #[test]
    fn builder_keeps_the_database_name() {
        let builder = MongoDbStore::builder("mongodb://localhost:27017", "samples_db")
            .connect_timeout(Duration::from_millis(250));

        assert_eq!(builder.database(), "samples_db");
        assert_eq!(builder.connect_timeout, Some(Duration::from_millis(250)));
    }
}
