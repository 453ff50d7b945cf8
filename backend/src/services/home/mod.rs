//! # Home Service Module
//!
//! Serves the content of the Home view under `/api/home`. The text is static
//! apart from the motivational quote, which is drawn again on every request.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the Home endpoint.
const API_PATH: &str = "/api/home";

/// Configures and returns the Actix `Scope` for the Home route.
///
/// *   **`GET /`**: returns a `HomeContent` JSON object with a random quote.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
