use std::{future::Future, sync::Arc};

use portfolio_models::profile::Profile;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ProfileFeatureService: Send + Sync + 'static {
    /// Returns the profile content.
    fn get_profile(&self) -> Arc<Profile>;

    /// Returns the public download path of the resume PDF, or `None` if the
    /// file does not exist.
    fn get_resume_download(
        &self,
    ) -> impl Future<Output = anyhow::Result<Option<ResumeDownload>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    pub download_path: String,
}

#[cfg(feature = "mock")]
impl MockProfileFeatureService {
    pub fn with_get_profile(mut self, profile: Arc<Profile>) -> Self {
        self.expect_get_profile().once().return_const(profile);
        self
    }

    pub fn with_get_resume_download(mut self, download: Option<ResumeDownload>) -> Self {
        self.expect_get_resume_download()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(download))));
        self
    }
}
