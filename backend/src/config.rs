//! Server configuration read from `PREP_*` environment variables.
//!
//! Every setting has a default so the portal starts without any environment
//! at all: it listens on `127.0.0.1:8080`, keeps its data in `govtprep.db`
//! and stores uploaded PDFs under `pdfs/`.

use crate::error::{AppError, Result};
use crate::DEFAULT_MAX_UPLOAD_BYTES;
use std::path::PathBuf;

const ENV_HOST: &str = "PREP_HOST";
const ENV_PORT: &str = "PREP_PORT";
const ENV_DATABASE: &str = "PREP_DATABASE";
const ENV_UPLOAD_DIR: &str = "PREP_UPLOAD_DIR";
const ENV_ADMIN_SECRET: &str = "PREP_ADMIN_SECRET";
const ENV_OPEN_BROWSER: &str = "PREP_OPEN_BROWSER";
const ENV_MAX_UPLOAD_BYTES: &str = "PREP_MAX_UPLOAD_BYTES";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
    /// Directory uploaded documents are written to.
    pub upload_dir: PathBuf,
    /// Shared admin password, compared verbatim.
    pub admin_secret: String,
    /// Open the default browser on the server URL after startup.
    pub open_browser: bool,
    /// Largest accepted PDF upload in bytes.
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("govtprep.db"),
            upload_dir: PathBuf::from("pdfs"),
            admin_secret: "mysecret123".to_string(),
            open_browser: false,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("{} must be a port number, got '{}'", ENV_PORT, port)))?;
        }
        if let Some(path) = lookup(ENV_DATABASE) {
            config.database_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(ENV_UPLOAD_DIR) {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Some(secret) = lookup(ENV_ADMIN_SECRET) {
            config.admin_secret = secret;
        }
        if let Some(flag) = lookup(ENV_OPEN_BROWSER) {
            config.open_browser = parse_flag(&flag).ok_or_else(|| {
                AppError::Config(format!("{} must be true or false, got '{}'", ENV_OPEN_BROWSER, flag))
            })?;
        }

        if let Some(limit) = lookup(ENV_MAX_UPLOAD_BYTES) {
            config.max_upload_bytes = limit.trim().parse().map_err(|_| {
                AppError::Config(format!("{} must be a byte count, got '{}'", ENV_MAX_UPLOAD_BYTES, limit))
            })?;
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
