use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use portfolio_models::contact::{ContactRecord, ContactSubmission};
use portfolio_persistence_contracts::ContactLogService;
use portfolio_shared_contracts::time::TimeService;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Time, ContactLog> {
    time: Time,
    contact_log: ContactLog,
}

impl<Time, ContactLog> ContactFeatureServiceImpl<Time, ContactLog> {
    pub fn new(time: Time, contact_log: ContactLog) -> Self {
        Self { time, contact_log }
    }
}

impl<Time, ContactLog> ContactFeatureService for ContactFeatureServiceImpl<Time, ContactLog>
where
    Time: TimeService,
    ContactLog: ContactLogService,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactRecord, ContactSubmitError> {
        let record = submission.validate(self.time.now())?;

        self.contact_log.append(record.clone()).await?;
        debug!(timestamp = %record.timestamp, "recorded contact submission");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use portfolio_models::contact::ContactValidationError;
    use portfolio_persistence_contracts::MockContactLogService;
    use portfolio_shared_contracts::time::MockTimeService;
    use portfolio_utils::assert_matches;

    use super::*;

    fn timestamp() -> DateTime<Utc> {
        "2024-05-07T13:37:00Z".parse().unwrap()
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: " Jo ".into(),
            email: " a@b.com ".into(),
            message: " Hello there! ".into(),
        }
    }

    fn expected_record() -> ContactRecord {
        ContactRecord {
            timestamp: timestamp(),
            name: "Jo".into(),
            email: "a@b.com".into(),
            message: "Hello there!".into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let time = MockTimeService::new().with_now(timestamp());
        let contact_log = MockContactLogService::new().with_append(expected_record());

        let sut = ContactFeatureServiceImpl::new(time, contact_log);

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_eq!(result.unwrap(), expected_record());
    }

    #[tokio::test]
    async fn validation_error_skips_the_log() {
        // Arrange
        let time = MockTimeService::new().with_now(timestamp());
        // No expectations: a rejected submission must never reach the log.
        let contact_log = MockContactLogService::new();

        let sut = ContactFeatureServiceImpl::new(time, contact_log);

        // Act
        let result = sut
            .submit(ContactSubmission {
                message: "Hi".into(),
                ..submission()
            })
            .await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Validation(
                ContactValidationError::MessageTooShort
            ))
        );
    }

    #[tokio::test]
    async fn write_error() {
        // Arrange
        let time = MockTimeService::new().with_now(timestamp());
        let contact_log =
            MockContactLogService::new().with_append_error(expected_record(), "disk full");

        let sut = ContactFeatureServiceImpl::new(time, contact_log);

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }
}
