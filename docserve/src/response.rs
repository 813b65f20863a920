//! The fixed-shape envelope wrapped around every HTTP response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Response envelope: status code, success flag, message, optional data and errors.
///
/// Omitted fields take the defaults of [`ApiResponse::default`]: status `500`,
/// `success = false`, an empty message, `null` data and no errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            success: false,
            message: String::new(),
            data: None,
            errors: Vec::new(),
        }
    }
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn success(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status_code: status.as_u16(),
            success: true,
            message: message.into(),
            data,
            errors: Vec::new(),
        }
    }

    /// A failed response with no data.
    pub fn failure(status: StatusCode, message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            errors,
            ..Default::default()
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Handler for requests no route or method matches.
pub async fn not_found() -> ApiResponse<()> {
    ApiResponse::failure(StatusCode::NOT_FOUND, "Not found", vec![])
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
