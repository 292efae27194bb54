use chrono::{DateTime, Utc};

/// Clock abstraction so record timestamps can be fixed in tests.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(now);
        self
    }
}
