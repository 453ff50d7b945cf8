//! Backend of the exam preparation portal.
//!
//! Wires the SQLite stores, the admin session table and the JSON API into an
//! Actix application. `main.rs` adds the embedded frontend bundle on top.

pub mod config;
pub mod db;
pub mod error;
pub mod services;
pub mod session;

use actix_files::Files;
use actix_web::web;
use common::model::resource::DOWNLOAD_PREFIX;
use db::Database;
use std::path::PathBuf;

/// Default cap on the size of one uploaded document (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared application state injected into every handler as `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    /// Directory uploaded PDFs are written to and served from.
    pub upload_dir: PathBuf,
    /// Uploads larger than this are rejected before being written.
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(db: Database, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            db,
            upload_dir: upload_dir.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Registers the API scopes and the download route for uploaded documents.
///
/// The caller provides `web::Data<AppState>` and `web::Data<SessionsState>`.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
        .service(services::home::configure_routes())
        .service(services::resources::configure_routes())
        .service(services::quizzes::configure_routes())
        .service(services::admin::configure_routes())
        .service(Files::new(DOWNLOAD_PREFIX, state.upload_dir.clone()));
}
