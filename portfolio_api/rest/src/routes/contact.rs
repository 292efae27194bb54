use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::{error, internal_server_error};
use crate::models::{contact::ApiContactSubmission, ApiConfirmation};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(submission): Json<ApiContactSubmission>,
) -> Response {
    match service.submit(submission.into()).await {
        Ok(_) => Json(ApiConfirmation {
            success: true,
            message: "Thank you! I'll get back to you soon.",
        })
        .into_response(),
        Err(ContactSubmitError::Validation(err)) => {
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
