use std::{env::VarError, net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon-separated list of config files, later files overriding earlier ones.
pub const CONFIG_PATH_ENV_VAR: &str = "PORTFOLIO_CONFIG";

pub fn load() -> anyhow::Result<Config> {
    match std::env::var(CONFIG_PATH_ENV_VAR) {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(VarError::NotPresent) => load_paths(&[DEFAULT_CONFIG_PATH]),
        Err(err) => Err(err).with_context(|| format!("Failed to read {CONFIG_PATH_ENV_VAR}")),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub log_path: std::path::PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ProfileConfig {
    pub resume_path: std::path::PathBuf,
    pub resume_download_path: String,
}
