use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;
pub mod profile;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An error occurred. Please try again later.",
    )
}

pub fn error(code: StatusCode, error: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            success: false,
            error: error.into(),
        }),
    )
        .into_response()
}

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}
