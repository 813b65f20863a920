use std::sync::Arc;

use axum::{Router, routing::get};
use docserve_core::backend::StoreBackendBuilder;

use super::{controller, service::SampleService};
use crate::response::not_found;

/// Routes for the samples resource, relative to its mount point.
///
/// Unsupported methods on a known path answer like an unknown route.
pub fn create_sample_router<C: StoreBackendBuilder>(service: Arc<SampleService<C>>) -> Router {
    Router::new()
        .route(
            "/",
            get(controller::get_all_samples::<C>)
                .post(controller::create_sample::<C>)
                .fallback(not_found),
        )
        .route(
            "/:id",
            get(controller::get_sample_by_id::<C>)
                .put(controller::update_sample::<C>)
                .delete(controller::delete_sample::<C>)
                .fallback(not_found),
        )
        .with_state(service)
}
