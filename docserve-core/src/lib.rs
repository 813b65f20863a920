//! Store abstraction shared by the docserve backends and the service layer.
//!
//! This crate provides:
//!
//! - **Document traits** ([`document`]) - Core traits for typed documents and BSON conversion
//! - **Store backend abstraction** ([`backend`]) - The single-document primitives every backend implements
//! - **Typed collections** ([`collection`]) - A typed view of one named collection
//! - **Connection provider** ([`connection`]) - A lazily opened, shared store handle
//! - **Error handling** ([`error`]) - Store error and result types
//!
//! # Example
//!
//! ```ignore
//! use docserve_core::{connection::ConnectionProvider, document::Document};
//! use bson::oid::ObjectId;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     #[serde(rename = "_id")]
//!     pub id: ObjectId,
//!     pub name: String,
//! }
//!
//! impl Document for User {
//!     fn collection_name() -> &'static str {
//!         "users"
//!     }
//! }
//!
//! let provider = ConnectionProvider::new(builder);
//! let store = provider.get_connection().await?;
//! let users = TypedCollection::<_, User>::new(&*store);
//! ```

pub mod backend;
pub mod collection;
pub mod connection;
pub mod document;
pub mod error;

#[cfg(test)]
pub(crate) mod testutil;
