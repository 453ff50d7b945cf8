//! Quiz endpoints under `/api/quizzes`.
//!
//! - `GET /api/quizzes?category=`: lists questions, optionally for one category.
//! - `POST /api/quizzes`: admin only. Creates a question from a `NewQuizForm`.
//! - `DELETE /api/quizzes/{id}`: admin only. Unknown ids are not an error.
//! - `POST /api/quizzes/score`: scores a set of selections against the
//!   questions of a category.

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

mod create;
mod list;
mod remove;
mod score;

const API_PATH: &str = "/api/quizzes";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/score", post().to(score::process))
        .route("/{id}", delete().to(remove::process))
}
