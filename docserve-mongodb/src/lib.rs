//! MongoDB backend implementation for docserve.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend` trait on top
//! of the official async driver. The driver owns connection pooling; a single
//! [`MongoDbStore`] is shared by every request.
//!
//! # Connection
//!
//! The builder takes a MongoDB connection string and a database name. Connection and
//! server-selection timeouts can be bounded so that an unreachable server fails the
//! startup instead of stalling it.
//!
//! # Example
//!
//! ```ignore
//! use docserve_core::backend::StoreBackendBuilder;
//! use docserve_mongodb::MongoDbStore;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://localhost:27017", "test")
//!         .connect_timeout(Duration::from_secs(5))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
