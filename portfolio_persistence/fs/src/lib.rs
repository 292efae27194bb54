use std::path::PathBuf;

use anyhow::Context;
use portfolio_models::contact::ContactRecord;
use portfolio_persistence_contracts::ContactLogService;
use tokio::{fs, io::AsyncWriteExt};

/// Append log backed by a newline-delimited JSON file.
///
/// Records are appended with a single write to a file opened in append mode,
/// so a crash can corrupt at most the line being written and concurrent
/// appends from this process do not interleave bytes within a line. Nothing
/// stronger is attempted: cross-writer ordering follows the platform's
/// `O_APPEND` semantics.
#[derive(Debug, Clone)]
pub struct FsContactLogService {
    config: FsContactLogConfig,
}

#[derive(Debug, Clone)]
pub struct FsContactLogConfig {
    pub path: PathBuf,
}

impl FsContactLogService {
    pub fn new(config: FsContactLogConfig) -> Self {
        Self { config }
    }
}

impl ContactLogService for FsContactLogService {
    async fn ensure_ready(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.config.path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create contact log directory {}", parent.display())
            })?;
        }
        Ok(())
    }

    async fn append(&self, record: ContactRecord) -> anyhow::Result<()> {
        self.ensure_ready().await?;

        let mut line =
            serde_json::to_vec(&record).context("Failed to serialize contact record")?;
        line.push(b'\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.path)
            .await
            .with_context(|| {
                format!("Failed to open contact log at {}", self.config.path.display())
            })?;

        // One write per record keeps each record on its own line.
        file.write_all(&line).await.with_context(|| {
            format!("Failed to append to contact log at {}", self.config.path.display())
        })?;
        file.flush().await?;

        Ok(())
    }
}
