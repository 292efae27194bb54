use portfolio_models::contact::ContactSubmission;
use serde::Deserialize;

/// Contact form payload. Absent keys are treated as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Full name of the sender
    #[serde(default)]
    pub name: String,
    /// Email address of the sender
    #[serde(default)]
    pub email: String,
    /// Message content
    #[serde(default)]
    pub message: String,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}
