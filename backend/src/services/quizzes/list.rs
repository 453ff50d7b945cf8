use crate::error::Result;
use crate::AppState;
use actix_web::{web, HttpResponse};
use common::requests::CategoryQuery;

pub async fn process(
    query: web::Query<CategoryQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let quizzes = state.db.quizzes()?.list(category)?;
    Ok(HttpResponse::Ok().json(quizzes))
}
