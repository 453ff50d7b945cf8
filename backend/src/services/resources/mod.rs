//! Study resource endpoints under `/api/resources`.
//!
//! - `GET /api/resources?category=`: lists resources, optionally restricted to
//!   one category.
//! - `POST /api/resources`: admin only. Multipart form with `title`,
//!   `category` and a `file` part holding the PDF. The file is stored in the
//!   upload directory under its original name, then the record is created
//!   with the stored path as its link.
//! - `DELETE /api/resources/{id}`: admin only. Deleting an unknown id
//!   succeeds without changing anything.

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

mod list;
mod remove;
mod upload;

const API_PATH: &str = "/api/resources";

/// Configures and returns the Actix scope for resource routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(upload::process))
        .route("/{id}", delete().to(remove::process))
}
