//! In-memory document storage backend for docserve.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It uses async-aware read-write locks for concurrent access and backs the service in
//! tests and in local development (`memory://` connection URIs).
//!
//! # Quick Start
//!
//! ```ignore
//! use docserve_core::{backend::StoreBackendBuilder, connection::ConnectionProvider};
//! use docserve_memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = ConnectionProvider::new(InMemoryStore::builder());
//!     let store = provider.get_connection().await?;
//!
//!     let id = store.insert_one(bson::doc! { "name": "Alice" }, "users").await?;
//!     assert!(store.find_one(id, "users").await?.is_some());
//!
//!     Ok(())
//! }
//! ```

pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
