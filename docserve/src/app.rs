//! Router assembly: mounts the samples resource and wraps it in the request-scoped
//! middleware shared by every route.

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use docserve_core::backend::StoreBackendBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::{
    response::{ApiResponse, not_found},
    sample::{route::create_sample_router, service::SampleService},
};

/// Builds the full application router around a shared sample service.
pub fn build_app<C: StoreBackendBuilder>(service: Arc<SampleService<C>>) -> Router {
    with_middleware(Router::new().nest("/samples", create_sample_router(service)))
}

fn with_middleware(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    tracing::error!(panic = %detail, "Request handler panicked");

    ApiResponse::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", vec![])
        .into_response()
}
