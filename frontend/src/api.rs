//! Thin client for the backend JSON API.
//!
//! Every call resolves to `Err(message)` with the server's error text (or a
//! transport error) so views can show it to the user as is.

use common::home::HomeContent;
use common::model::category::Category;
use common::model::quiz::QuizQuestion;
use common::model::resource::Resource;
use common::requests::{AuthStatus, LoginRequest, NewQuizForm};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

pub type ApiResult<T> = Result<T, String>;

async fn error_text(resp: Response) -> String {
    let status = resp.status();
    match resp.text().await {
        Ok(text) if !text.trim().is_empty() => text,
        _ => format!("Request failed with status {}", status),
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    if resp.ok() {
        resp.json::<T>().await.map_err(|e| e.to_string())
    } else {
        Err(error_text(resp).await)
    }
}

async fn expect_ok(resp: Response) -> ApiResult<()> {
    if resp.ok() {
        Ok(())
    } else {
        Err(error_text(resp).await)
    }
}

pub async fn fetch_home() -> ApiResult<HomeContent> {
    let resp = Request::get("/api/home")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn fetch_resources(category: Option<Category>) -> ApiResult<Vec<Resource>> {
    let mut request = Request::get("/api/resources");
    if let Some(category) = category {
        request = request.query([("category", category.as_str())]);
    }
    let resp = request.send().await.map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn fetch_quizzes(category: Option<Category>) -> ApiResult<Vec<QuizQuestion>> {
    let mut request = Request::get("/api/quizzes");
    if let Some(category) = category {
        request = request.query([("category", category.as_str())]);
    }
    let resp = request.send().await.map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn fetch_auth_status() -> ApiResult<AuthStatus> {
    let resp = Request::get("/api/admin/status")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn login(password: String) -> ApiResult<AuthStatus> {
    let resp = Request::post("/api/admin/login")
        .json(&LoginRequest { password })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

/// Uploads a PDF as a new resource using a multipart form.
pub async fn upload_resource(
    title: &str,
    category: Category,
    file: &File,
) -> ApiResult<Resource> {
    let form = FormData::new().map_err(|_| "Cannot create form data".to_string())?;
    form.append_with_str("title", title)
        .and_then(|_| form.append_with_str("category", category.as_str()))
        .and_then(|_| form.append_with_blob_and_filename("file", file, &file.name()))
        .map_err(|_| "Cannot attach the selected file".to_string())?;

    let resp = Request::post("/api/resources")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn delete_resource(id: i64) -> ApiResult<()> {
    let resp = Request::delete(&format!("/api/resources/{}", id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}

pub async fn add_quiz(form: NewQuizForm) -> ApiResult<QuizQuestion> {
    let resp = Request::post("/api/quizzes")
        .json(&form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn delete_quiz(id: i64) -> ApiResult<()> {
    let resp = Request::delete(&format!("/api/quizzes/{}", id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(resp).await
}
