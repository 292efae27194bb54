use serde::Serialize;

pub mod contact;

/// Failure envelope shared by all endpoints: `{"success": false, "error"}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

/// Success envelope for endpoints that only confirm an action.
#[derive(Debug, Serialize)]
pub struct ApiConfirmation {
    pub success: bool,
    pub message: &'static str,
}
