use crate::session::SessionsState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::requests::AuthStatus;

pub async fn process(req: HttpRequest, sessions: web::Data<SessionsState>) -> impl Responder {
    let authenticated = sessions.status(&req).await.is_authenticated();
    HttpResponse::Ok().json(AuthStatus { authenticated })
}
