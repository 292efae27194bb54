use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use portfolio_core_profile_contracts::{ProfileFeatureService, ResumeDownload};
use portfolio_models::profile::Profile;

#[derive(Debug, Clone)]
pub struct ProfileFeatureServiceImpl {
    profile: Arc<Profile>,
    config: ProfileFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ProfileFeatureConfig {
    /// Filesystem location of the resume PDF.
    pub resume_path: PathBuf,
    /// Public path under which the excluded static file server exposes the
    /// resume PDF.
    pub resume_download_path: String,
}

impl ProfileFeatureServiceImpl {
    pub fn new(profile: Arc<Profile>, config: ProfileFeatureConfig) -> Self {
        Self { profile, config }
    }
}

impl ProfileFeatureService for ProfileFeatureServiceImpl {
    fn get_profile(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }

    async fn get_resume_download(&self) -> anyhow::Result<Option<ResumeDownload>> {
        let exists = tokio::fs::try_exists(&self.config.resume_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to check for resume at {}",
                    self.config.resume_path.display()
                )
            })?;

        Ok(exists.then(|| ResumeDownload {
            download_path: self.config.resume_download_path.clone(),
        }))
    }
}
