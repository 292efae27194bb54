use std::future::Future;

use portfolio_models::contact::ContactRecord;

/// Write-only handle to the durable contact append log.
///
/// The log is a newline-delimited sequence of serialized [`ContactRecord`]s.
/// It is never read back, truncated, or rotated through this interface.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactLogService: Send + Sync + 'static {
    /// Creates the log's storage location if it does not exist yet.
    ///
    /// Idempotent. [`ContactLogService::append`] invokes this lazily, but it
    /// can also be called on its own, e.g. to verify writability at startup.
    fn ensure_ready(&self) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Appends a single record to the end of the log.
    ///
    /// Previously appended records are never overwritten or reordered.
    fn append(&self, record: ContactRecord) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactLogService {
    pub fn with_append(mut self, record: ContactRecord) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_append_error(mut self, record: ContactRecord, error: &'static str) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(error)))));
        self
    }
}
