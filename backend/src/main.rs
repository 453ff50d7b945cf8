use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use backend::config::AppConfig;
use backend::db::Database;
use backend::session::SessionsState;
use backend::AppState;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::fs;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        error!("{}", e);
        io::Error::other(e.to_string())
    })?;
    let url = config.url();

    let db = Database::open(&config.database_path).map_err(|e| {
        error!("Cannot open database {}: {}", config.database_path.display(), e);
        io::Error::other(e.to_string())
    })?;
    fs::create_dir_all(&config.upload_dir)?;

    let state = AppState::new(db, config.upload_dir.clone())
        .with_max_upload_bytes(config.max_upload_bytes);
    let sessions = SessionsState::new(config.admin_secret.clone());

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!(
        "Server running at {} (uploads in {})",
        url,
        config.upload_dir.display()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .configure(|cfg| backend::configure(cfg, &state))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
