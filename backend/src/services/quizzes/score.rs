use crate::error::Result;
use crate::AppState;
use actix_web::{web, HttpResponse};
use common::requests::ScoreRequest;
use common::scoring::score;

/// Scores the submitted selections against the current questions of the
/// requested category (or all questions when no category is given).
pub async fn process(
    payload: web::Json<ScoreRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let category = payload.category.as_deref().filter(|c| !c.is_empty());
    let questions = state.db.quizzes()?.list(category)?;
    Ok(HttpResponse::Ok().json(score(&questions, &payload.selections)))
}
