use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        controller::admin::require_admin, error::AppError, service::admin::upload::UploadService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static ADMIN_UPLOAD_TAG: &str = "admin-upload";

const FILE_FIELD: &str = "file";

/// Upload an image.
///
/// Expects a multipart form with a `file` field holding a JPEG, PNG, WebP or GIF image.
/// The stored file is served from the returned URL.
///
/// # Access Control
/// - `Admin` - Only admins can upload files
///
/// # Returns
/// - `201 Created` - Image stored
/// - `400 Bad Request` - Missing file, unsupported type, or file too large
/// - `500 Internal Server Error` - File could not be written
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = ADMIN_UPLOAD_TAG,
    request_body(content = String, content_type = "multipart/form-data", description = "Form with a `file` field"),
    responses(
        (status = 201, description = "Image stored", body = UploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let url = UploadService::new(&state.config.upload_dir, state.config.max_upload_bytes)
            .save_image(content_type.as_deref(), &bytes)
            .await?;

        return Ok((StatusCode::CREATED, Json(UploadDto { url })));
    }

    Err(AppError::BadRequest(
        "Multipart field `file` is required".to_string(),
    ))
}
