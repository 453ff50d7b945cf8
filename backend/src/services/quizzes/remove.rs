use crate::error::Result;
use crate::session::SessionsState;
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

pub async fn process(
    req: HttpRequest,
    id: web::Path<i64>,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
) -> Result<HttpResponse> {
    sessions.require_admin(&req).await?;

    let id = id.into_inner();
    if state.db.quizzes()?.delete(id)? {
        info!("Deleted quiz {}", id);
    } else {
        info!("Quiz {} not found, nothing deleted", id);
    }
    Ok(HttpResponse::Ok().body("Deleted!"))
}
