//! Handlers for file uploads (site log photos, claim proof documents).
//!
//! Uploaded files land in a bucket subdirectory of the configured upload
//! directory under a generated name and are served back read-only at
//! `/uploads/{bucket}/{name}`.
//! Callers store the returned URL on the record they attach the file to.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use gantry_core::permissions::{PERM_CREATE_SITE_LOGS, PERM_SUBMIT_CLAIMS, PERM_WRITE_ALL};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::authorize_any;
use crate::state::AppState;

/// File extensions accepted for upload: site photos and proof documents.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "pdf"];

/// Buckets files may be uploaded into. Each is a subdirectory of the
/// configured upload directory.
const BUCKETS: &[&str] = &["site-photos", "claim-invoices"];

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Response body for `POST /uploads`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public path the file is served at.
    pub url: String,
    pub size_bytes: i64,
}

/// POST /api/v1/uploads
///
/// Accepts a multipart form with a `bucket` text field naming the target
/// bucket and a single `file` field. Anyone who can attach files to a
/// record (site logs, claims, project documents) can upload.
pub async fn upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    authorize_any(
        &user,
        &[PERM_WRITE_ALL, PERM_CREATE_SITE_LOGS, PERM_SUBMIT_CLAIMS],
    )?;

    let mut bucket: Option<String> = None;
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name().unwrap_or("") {
            "bucket" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                bucket = Some(value);
            }
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            // ignore unknown fields
            _ => {}
        }
    }

    let bucket =
        bucket.ok_or_else(|| AppError::BadRequest("Missing required 'bucket' field".into()))?;
    if !BUCKETS.contains(&bucket.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown bucket '{bucket}'. Supported: site-photos, claim-invoices"
        )));
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} MiB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file type '.{ext}'. Supported: .jpg, .jpeg, .png, .webp, .pdf"
        )));
    }

    let bucket_dir = state.config.upload_dir.join(&bucket);
    tokio::fs::create_dir_all(&bucket_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    // Generated name: no caller-controlled path segments reach the disk.
    let stored_filename = format!("{}.{ext}", Uuid::new_v4());
    let file_path = bucket_dir.join(&stored_filename);
    tokio::fs::write(&file_path, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(
        user_id = user.user_id,
        bucket = %bucket,
        file = %stored_filename,
        size_bytes = data.len(),
        "file uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: format!("/uploads/{bucket}/{stored_filename}"),
            size_bytes: data.len() as i64,
        }),
    ))
}
