//! End-to-end tests of the contact pipeline against a real filesystem log.

use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_models::contact::{ContactRecord, ContactSubmission, ContactValidationError};
use portfolio_persistence_fs::{FsContactLogConfig, FsContactLogService};
use portfolio_shared_impl::time::TimeServiceImpl;
use portfolio_utils::assert_matches;

fn pipeline(
    path: std::path::PathBuf,
) -> ContactFeatureServiceImpl<TimeServiceImpl, FsContactLogService> {
    ContactFeatureServiceImpl::new(
        TimeServiceImpl,
        FsContactLogService::new(FsContactLogConfig { path }),
    )
}

fn records(path: &std::path::Path) -> Vec<ContactRecord> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn accepted_submission_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("contacts.log");

    let record = pipeline(path.clone())
        .submit(ContactSubmission {
            name: " Jo ".into(),
            email: " a@b.com ".into(),
            message: " Hello there! ".into(),
        })
        .await
        .unwrap();

    assert_eq!(record.name, "Jo");
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.message, "Hello there!");
    assert_eq!(records(&path), [record]);
}

#[tokio::test]
async fn rejected_submission_leaves_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("contacts.log");

    let result = pipeline(path.clone())
        .submit(ContactSubmission {
            name: "Jo".into(),
            email: "a@b.com".into(),
            message: "Hi".into(),
        })
        .await;

    assert_matches!(
        result,
        Err(ContactSubmitError::Validation(
            ContactValidationError::MessageTooShort
        ))
    );
    // Validation failed, so not even the log directory was created.
    assert!(!dir.path().join("logs").exists());
}

#[tokio::test]
async fn concurrent_submissions_append_two_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.log");

    let first = tokio::spawn({
        let pipeline = pipeline(path.clone());
        async move {
            pipeline
                .submit(ContactSubmission {
                    name: "First".into(),
                    email: "first@example.com".into(),
                    message: "Hello from the first submission.".into(),
                })
                .await
        }
    });
    let second = tokio::spawn({
        let pipeline = pipeline(path.clone());
        async move {
            pipeline
                .submit(ContactSubmission {
                    name: "Second".into(),
                    email: "second@example.com".into(),
                    message: "Hello from the second submission.".into(),
                })
                .await
        }
    });
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    let mut names = records(&path)
        .into_iter()
        .map(|record| record.name)
        .collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, ["First", "Second"]);
}
