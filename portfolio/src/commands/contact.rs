use clap::Subcommand;
use portfolio_config::Config;
use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_models::contact::ContactSubmission;
use portfolio_persistence_contracts::ContactLogService;
use portfolio_persistence_fs::{FsContactLogConfig, FsContactLogService};
use portfolio_shared_impl::time::TimeServiceImpl;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Verify that the contact log is writable by appending a probe record
    Test,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Test => test(config).await,
        }
    }
}

async fn test(config: Config) -> anyhow::Result<()> {
    let contact_log = FsContactLogService::new(FsContactLogConfig {
        path: config.contact.log_path,
    });
    contact_log.ensure_ready().await?;

    let contact = ContactFeatureServiceImpl::new(TimeServiceImpl, contact_log);
    let record = contact
        .submit(ContactSubmission {
            name: "Contact log probe".into(),
            email: "probe@example.com".into(),
            message: "Probe record appended by `portfolio contact test`.".into(),
        })
        .await?;

    println!("Appended probe record at {}", record.timestamp);

    Ok(())
}
