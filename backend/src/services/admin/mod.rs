//! Admin session endpoints under `/api/admin`.
//!
//! - `POST /api/admin/login`: submits the admin password for the caller's
//!   session. On success the session cookie is (re)issued and the session can
//!   perform admin writes until the browser session ends. A wrong password
//!   answers `401` and leaves the session unchanged.
//! - `GET /api/admin/status`: reports whether the caller's session is
//!   authenticated, so the admin view knows whether to show the login form.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod login;
mod status;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/status", get().to(status::process))
}
