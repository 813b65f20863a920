//! HTTP handlers for the samples resource.
//!
//! Each handler validates its body (when it has one), calls the service and renders the
//! outcome as an [`ApiResponse`]. Store failures become a `500` whose `errors` carry the
//! failure text, except malformed identifiers which are the client's fault and get `400`.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use docserve_core::{backend::StoreBackendBuilder, error::StoreError};
use serde_json::Value;

use super::{
    entity::{SampleInput, SampleResponse},
    schema::{CREATE_SAMPLE_SCHEMA, ObjectSchema, UPDATE_SAMPLE_SCHEMA},
    service::SampleService,
};
use crate::response::ApiResponse;

type SampleState<C> = State<Arc<SampleService<C>>>;

fn validate_body(
    schema: &ObjectSchema,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<SampleInput, ApiResponse<SampleResponse>> {
    let bad_request = |message: String| ApiResponse::failure(StatusCode::BAD_REQUEST, message, vec![]);

    let Json(value) = body.map_err(|rejection| bad_request(rejection.body_text()))?;

    schema.parse(value).map_err(|err| bad_request(err.to_string()))
}

fn store_failure<T>(context: &str, err: StoreError) -> ApiResponse<T> {
    match err {
        StoreError::InvalidIdentifier(id) => ApiResponse::failure(
            StatusCode::BAD_REQUEST,
            format!("Invalid sample id: {id}"),
            vec![],
        ),
        err => {
            tracing::error!(error = %err, "{context}");
            ApiResponse::failure(StatusCode::INTERNAL_SERVER_ERROR, context, vec![err.to_string()])
        }
    }
}

/// `POST /samples`
pub async fn create_sample<C: StoreBackendBuilder>(
    State(service): SampleState<C>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse<SampleResponse> {
    let input = match validate_body(&CREATE_SAMPLE_SCHEMA, body) {
        Ok(input) => input,
        Err(response) => return response,
    };

    match service.create_sample(&input).await {
        Ok(id) => ApiResponse::success(
            StatusCode::CREATED,
            format!("Sample created successfully with ID: {id}"),
            Some(SampleResponse::new(id, input)),
        ),
        Err(err) => store_failure("Error creating sample", err),
    }
}

/// `GET /samples`
pub async fn get_all_samples<C: StoreBackendBuilder>(
    State(service): SampleState<C>,
) -> ApiResponse<Vec<SampleResponse>> {
    match service.get_all_samples().await {
        Ok(samples) => ApiResponse::success(
            StatusCode::OK,
            "All samples retrieved",
            Some(samples.into_iter().map(SampleResponse::from).collect()),
        ),
        Err(err) => store_failure("Error getting samples", err),
    }
}

/// `GET /samples/:id`
pub async fn get_sample_by_id<C: StoreBackendBuilder>(
    State(service): SampleState<C>,
    Path(id): Path<String>,
) -> ApiResponse<SampleResponse> {
    match service.get_sample_by_id(&id).await {
        Ok(Some(sample)) => ApiResponse::success(
            StatusCode::OK,
            format!("Sample with id {id} retrieved"),
            Some(sample.into()),
        ),
        Ok(None) => ApiResponse::failure(
            StatusCode::NOT_FOUND,
            format!("Sample with id {id} not found"),
            vec![],
        ),
        Err(err) => store_failure("Error getting sample", err),
    }
}

/// `PUT /samples/:id`
///
/// The response data is the sample as it was before the update.
pub async fn update_sample<C: StoreBackendBuilder>(
    State(service): SampleState<C>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse<SampleResponse> {
    let input = match validate_body(&UPDATE_SAMPLE_SCHEMA, body) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let outcome = match service.update_sample(&id, &input).await {
        Ok(outcome) => outcome,
        Err(err) => return store_failure("Error updating sample", err),
    };

    let Some(sample) = outcome.sample else {
        return ApiResponse::failure(
            StatusCode::NOT_FOUND,
            format!("Sample with id {id} not found"),
            vec![],
        );
    };

    let message = if outcome.modified_count == 0 {
        "Modified count is 0".to_string()
    } else {
        format!("Sample with id {id} updated/replaced using PUT operation")
    };

    ApiResponse::success(StatusCode::OK, message, Some(sample.into()))
}

/// `DELETE /samples/:id`
///
/// The response data is the sample as it was before removal.
pub async fn delete_sample<C: StoreBackendBuilder>(
    State(service): SampleState<C>,
    Path(id): Path<String>,
) -> ApiResponse<SampleResponse> {
    match service.delete_sample(&id).await {
        Ok(outcome) if outcome.deleted_count == 0 => {
            ApiResponse::failure(StatusCode::NOT_FOUND, "Sample not found", vec![])
        }
        Ok(outcome) => ApiResponse::success(
            StatusCode::OK,
            "Sample deleted successfully",
            outcome.sample.map(SampleResponse::from),
        ),
        Err(err) => store_failure("Error deleting sample", err),
    }
}
