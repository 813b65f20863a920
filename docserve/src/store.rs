//! Runtime selection of the store backend.

use async_trait::async_trait;
use docserve_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::StoreResult,
};
use docserve_memory::InMemoryStoreBuilder;
use docserve_mongodb::MongoDbStoreBuilder;

/// Builds whichever backend the configuration names.
#[derive(Debug, Clone)]
pub enum StoreBuilder {
    /// A process-local store that forgets everything on exit.
    Memory(InMemoryStoreBuilder),
    /// A MongoDB deployment reached through a connection string.
    MongoDb(MongoDbStoreBuilder),
}

impl StoreBuilder {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreBuilder::Memory(_) => "memory",
            StoreBuilder::MongoDb(_) => "mongodb",
        }
    }
}

#[async_trait]
impl StoreBackendBuilder for StoreBuilder {
    type Backend = Box<dyn StoreBackend>;

    async fn build(&self) -> StoreResult<Self::Backend> {
        Ok(match self {
            StoreBuilder::Memory(builder) => Box::new(builder.build().await?),
            StoreBuilder::MongoDb(builder) => Box::new(builder.build().await?),
        })
    }
}
