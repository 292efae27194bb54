use std::sync::Arc;

use anyhow::Context;
use portfolio_api_rest::RestServer;
use portfolio_config::Config;
use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_core_profile_impl::{ProfileFeatureConfig, ProfileFeatureServiceImpl};
use portfolio_models::profile::Profile;
use portfolio_persistence_fs::{FsContactLogConfig, FsContactLogService};
use portfolio_shared_impl::time::TimeServiceImpl;
use tracing::info;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let profile: Arc<Profile> = Arc::new(
        serde_json::from_str(portfolio_assets::PROFILE_JSON)
            .context("Failed to parse embedded profile")?,
    );

    // The log directory is created lazily on the first accepted submission.
    let contact_log = FsContactLogService::new(FsContactLogConfig {
        path: config.contact.log_path.clone(),
    });
    info!("Contact log at {}", config.contact.log_path.display());

    let contact = ContactFeatureServiceImpl::new(TimeServiceImpl, contact_log);
    let profile = ProfileFeatureServiceImpl::new(
        profile,
        ProfileFeatureConfig {
            resume_path: config.profile.resume_path.clone(),
            resume_download_path: config.profile.resume_download_path.clone(),
        },
    );

    let server = RestServer::new(contact, profile);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
