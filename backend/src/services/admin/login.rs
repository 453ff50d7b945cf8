use crate::error::Result;
use crate::session::{session_cookie, SessionsState};
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::{AuthStatus, LoginRequest};

pub async fn process(
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
    sessions: web::Data<SessionsState>,
) -> Result<HttpResponse> {
    let session_id = sessions.login(&req, &payload.password).await?;
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(&session_id))
        .json(AuthStatus {
            authenticated: true,
        }))
}
