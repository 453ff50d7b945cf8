use crate::error::{AppError, Result};
use crate::session::SessionsState;
use crate::AppState;
use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::resource::Resource;
use futures_util::StreamExt;
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

const MISSING_FILE: &str = "Please upload a PDF file.";

/// Largest accepted value of a text part such as `title`.
const MAX_TEXT_BYTES: usize = 64 * 1024;

/// HTTP handler wrapper: checks the admin session, then stores the upload.
///
/// - On success: `201 Created` with the new `Resource` as JSON.
/// - On invalid input: `400 Bad Request` with the message to show.
pub async fn process(
    req: HttpRequest,
    payload: Multipart,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
) -> Result<HttpResponse> {
    sessions.require_admin(&req).await?;

    let resource = upload_resource(payload, &state).await?;
    info!(
        "Added resource {} '{}' ({}) -> {}",
        resource.id, resource.title, resource.category, resource.link
    );
    Ok(HttpResponse::Created().json(resource))
}

/// An uploaded document held in memory until the whole form is validated.
struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

/// Reads the multipart form, writes the PDF to the upload directory and
/// records the resource.
///
/// Nothing is written unless the form has a PDF file and a category. The file
/// is written before the record is inserted.
pub async fn upload_resource(mut payload: Multipart, state: &AppState) -> Result<Resource> {
    let mut title: Option<String> = None;
    let mut category: Option<String> = None;
    let mut upload: Option<UploadedFile> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match field_name.as_deref() {
            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();

                // Browsers send an empty file part when nothing was selected.
                if filename.trim().is_empty() {
                    discard(&mut field).await?;
                    continue;
                }

                let name = stored_file_name(&filename)?;
                let bytes = read_bytes(&mut field, state.max_upload_bytes).await?;
                upload = Some(UploadedFile { name, bytes });
            }
            Some("title") => title = Some(read_text(&mut field).await?),
            Some("category") => category = Some(read_text(&mut field).await?),
            _ => discard(&mut field).await?,
        }
    }

    let upload = upload.ok_or_else(|| AppError::validation(MISSING_FILE))?;
    let category = category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::validation("Please select a group."))?;
    let title = title.unwrap_or_default();

    fs::create_dir_all(&state.upload_dir)?;
    let path = state.upload_dir.join(&upload.name);
    {
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(&upload.bytes)?;
        writer.flush()?;
    }

    let link = path.to_string_lossy().into_owned();
    let id = state.db.resources()?.add(&title, &link, &category)?;

    Ok(Resource {
        id,
        title,
        link,
        category,
    })
}

/// File name an upload is stored under: the client's name without any
/// directory components. Only `.pdf` files are accepted.
pub fn stored_file_name(original: &str) -> Result<String> {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::validation(MISSING_FILE));
    }
    if !name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::validation("The file must end with .pdf"));
    }
    Ok(name.to_string())
}

/// Buffers a part, failing as soon as it grows past `limit` bytes.
async fn read_bytes(field: &mut Field, limit: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if bytes.len() + chunk.len() > limit {
            return Err(AppError::validation(format!(
                "Upload is larger than the {} byte limit",
                limit
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Consumes a part without keeping its contents.
async fn discard(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}

async fn read_text(field: &mut Field) -> Result<String> {
    let bytes = read_bytes(field, MAX_TEXT_BYTES).await?;
    String::from_utf8(bytes).map_err(|_| AppError::validation("Form fields must be valid UTF-8"))
}
