//! Lazily opened, process-wide store handle.
//!
//! A [`ConnectionProvider`] is constructed once at startup from a
//! [`StoreBackendBuilder`] and shared by reference with every data-access component.
//! The first call to [`ConnectionProvider::get_connection`] opens the connection; every
//! later call returns the same handle.

use std::{fmt, sync::Arc};

use mea::mutex::Mutex;

use crate::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
};

/// Owns the builder for a store backend and memoizes the single backend it produces.
///
/// Initialization happens under an async mutex, so concurrent first calls wait for the
/// one in-flight connection attempt instead of opening their own. A failed attempt
/// leaves the slot empty and the next caller tries again.
pub struct ConnectionProvider<C: StoreBackendBuilder> {
    builder: C,
    handle: Mutex<Option<Arc<C::Backend>>>,
}

impl<C: StoreBackendBuilder> ConnectionProvider<C> {
    pub fn new(builder: C) -> Self {
        Self {
            builder,
            handle: Mutex::new(None),
        }
    }

    /// Creates a provider whose connection is already open.
    pub fn with_backend(builder: C, backend: C::Backend) -> Self {
        Self {
            builder,
            handle: Mutex::new(Some(Arc::new(backend))),
        }
    }

    /// Returns the shared store handle, opening it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the backend cannot be built or does not
    /// answer a ping. Nothing is cached in that case.
    pub async fn get_connection(&self) -> StoreResult<Arc<C::Backend>> {
        let mut handle = self.handle.lock().await;

        if let Some(backend) = handle.as_ref() {
            return Ok(Arc::clone(backend));
        }

        let backend = match self.connect().await {
            Ok(backend) => Arc::new(backend),
            Err(err) => {
                tracing::error!(error = %err, "Error connecting to document store");
                return Err(err);
            }
        };

        tracing::info!(outcome = "success", "Connected to document store");
        *handle = Some(Arc::clone(&backend));

        Ok(backend)
    }

    /// Shuts down the open backend, if any, and empties the slot.
    ///
    /// A later [`get_connection`](Self::get_connection) opens a fresh connection.
    pub async fn close(&self) {
        let backend = self.handle.lock().await.take();

        if let Some(backend) = backend {
            backend.shutdown().await;
            tracing::info!("Document store connection closed");
        }
    }

    /// Returns `true` once a connection has been opened.
    pub async fn is_connected(&self) -> bool {
        self.handle.lock().await.is_some()
    }

    async fn connect(&self) -> StoreResult<C::Backend> {
        let backend = self.builder.build().await.map_err(into_connection_error)?;
        backend.ping().await.map_err(into_connection_error)?;

        Ok(backend)
    }
}

impl<C> fmt::Debug for ConnectionProvider<C>
where
    C: StoreBackendBuilder + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProvider")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

fn into_connection_error(err: StoreError) -> StoreError {
    match err {
        StoreError::Connection(_) => err,
        other => StoreError::Connection(other.to_string()),
    }
}
