//! HTTP request handlers
//!
//! Handlers stay thin: validate required fields, call an `app_fs`
//! operation, wrap the status. All failure mapping lives in `ApiError`.
//! Required fields are modeled as `Option` and checked here so a missing
//! field produces the `{ "error": … }` body instead of an extractor
//! rejection.

use crate::error::ApiError;
use app_fs::FileRecord;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub path: Option<String>,
    #[serde(default)]
    pub content: bool,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    pub path: Option<String>,
    #[serde(default)]
    pub is_dir: bool,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub path: Option<String>,
    pub content: Option<String>,
}

/// Content response for `GET /file?content=true`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContentResponse {
    pub path: String,
    pub name: String,
    pub content: String,
    pub size: u64,
    pub mod_date: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /files — list the immediate children of a directory.
pub async fn list_files(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let records = app_fs::list_dir(query.path.as_deref()).await?;
    info!(
        path = query.path.as_deref().unwrap_or("."),
        count = records.len(),
        "list files"
    );
    Ok(Json(records))
}

/// GET /file — file metadata, or metadata plus content with `content=true`.
pub async fn read_item(Query(query): Query<FileQuery>) -> Result<Response, ApiError> {
    let path = require_path(query.path)?;

    if query.content {
        let file = app_fs::read_file(&path).await?;
        info!(path = %path, size = file.content.len(), "read file content");
        let record = file.record;
        let body = FileContentResponse {
            path: record.id,
            name: record.name,
            content: file.content,
            size: record.size.unwrap_or(0),
            mod_date: record.modified_at,
        };
        Ok(Json(body).into_response())
    } else {
        let record = app_fs::stat_file(&path).await?;
        info!(path = %path, "read file metadata");
        Ok(Json(record).into_response())
    }
}

/// POST /files — create a directory (idempotent) or a file (overwrites).
pub async fn create_item(
    Json(body): Json<CreateRequest>,
) -> Result<(StatusCode, Json<FileRecord>), ApiError> {
    let path = require_path(body.path)?;
    let record = app_fs::create_entry(&path, body.is_dir, body.content.as_deref()).await?;
    info!(path = %path, is_dir = body.is_dir, "create entry");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /file — overwrite an existing file; never creates one.
pub async fn update_item(Json(body): Json<UpdateRequest>) -> Result<Json<FileRecord>, ApiError> {
    let path = require_path(body.path)?;
    // Empty content is a valid update; only absence is rejected.
    let content = body
        .content
        .ok_or_else(|| ApiError::InvalidArgument("content is required".to_string()))?;

    let record = app_fs::update_file(&path, &content).await?;
    info!(path = %path, size = content.len(), "update file");
    Ok(Json(record))
}

/// DELETE /file — remove a file, or a directory subtree recursively.
pub async fn delete_item(
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let path = require_path(query.path)?;
    let deleted = app_fs::delete_entry(&path).await?;
    info!(path = %deleted.display(), "delete entry");
    Ok(Json(DeleteResponse {
        message: format!("Deleted: {}", deleted.display()),
    }))
}

fn require_path(path: Option<String>) -> Result<String, ApiError> {
    match path {
        Some(path) if !path.is_empty() => Ok(path),
        _ => Err(ApiError::InvalidArgument("path is required".to_string())),
    }
}
