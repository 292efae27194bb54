use std::future::Future;

use portfolio_models::contact::{ContactRecord, ContactSubmission, ContactValidationError};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates a contact form submission and durably records it.
    ///
    /// The submission is never written before it has passed validation.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactRecord, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<ContactRecord, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
