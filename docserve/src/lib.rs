//! A minimal CRUD microservice for `Sample` documents.
//!
//! Requests flow through four layers:
//!
//! - **Controller** ([`sample::controller`]) - binds HTTP verbs to service calls and wraps
//!   results in the [`response::ApiResponse`] envelope
//! - **Validation** ([`sample::schema`]) - rejects malformed bodies before they reach the service
//! - **Service** ([`sample::service`]) - logging and read-before-write orchestration
//! - **Data access** ([`sample::model`]) - single-document operations on the `samples` collection
//!
//! The store handle comes from a [`docserve_core::connection::ConnectionProvider`] built
//! once at startup from the [`config::Config`] and shared by every request.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docserve::{app::build_app, sample::{model::SampleModel, service::SampleService}};
//! use docserve_core::connection::ConnectionProvider;
//! use docserve_memory::InMemoryStore;
//!
//! let provider = Arc::new(ConnectionProvider::new(InMemoryStore::builder()));
//! let service = Arc::new(SampleService::new(SampleModel::new(provider)));
//! let app = build_app(service);
//! ```

pub mod app;
pub mod config;
pub mod logging;
pub mod response;
pub mod sample;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;
