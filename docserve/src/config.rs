//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use docserve_memory::InMemoryStoreBuilder;
use docserve_mongodb::MongoDbStoreBuilder;

use crate::store::StoreBuilder;

/// Connection strings with this scheme select the in-memory backend.
pub const MEMORY_URI_SCHEME: &str = "memory://";

#[derive(Parser, Debug, Clone)]
#[command(name = "docserve")]
#[command(about = "CRUD microservice for sample documents", long_about = None)]
pub struct Config {
    /// Store connection string (`mongodb://...`, or `memory://` for a process-local store)
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: String,

    /// Database holding the samples collection
    #[arg(long, env = "MONGODB_DATABASE", default_value = "test")]
    pub database: String,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Seconds to wait for the store before giving up on startup
    #[arg(long, env = "MONGODB_CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_builder(&self) -> StoreBuilder {
        if self.mongodb_uri.starts_with(MEMORY_URI_SCHEME) {
            return StoreBuilder::Memory(InMemoryStoreBuilder);
        }

        StoreBuilder::MongoDb(
            MongoDbStoreBuilder::new(&self.mongodb_uri, &self.database)
                .connect_timeout(Duration::from_secs(self.connect_timeout_secs)),
        )
    }
}
