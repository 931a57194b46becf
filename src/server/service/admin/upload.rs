//! Image uploads stored on local disk and served under `/uploads`.

use std::path::Path;

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

use crate::server::error::AppError;

/// Public URL prefix the upload directory is served at.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

pub struct UploadService<'a> {
    upload_dir: &'a Path,
    max_bytes: usize,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a Path, max_bytes: usize) -> Self {
        Self {
            upload_dir,
            max_bytes,
        }
    }

    /// Stores an uploaded image under a generated name.
    ///
    /// # Arguments
    /// - `content_type` - MIME type reported by the client
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(url)` - Public URL of the stored file, e.g. `/uploads/1717171717-ab12cd34.png`
    /// - `Err(AppError::BadRequest)` - Empty, too large, or not a supported image type
    /// - `Err(AppError::IoErr)` - File could not be written
    pub async fn save_image(
        &self,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        let extension = content_type.and_then(image_extension).ok_or_else(|| {
            AppError::BadRequest("Only JPEG, PNG, WebP and GIF images are allowed".to_string())
        })?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if bytes.len() > self.max_bytes {
            return Err(AppError::BadRequest(format!(
                "File exceeds the {} byte upload limit",
                self.max_bytes
            )));
        }

        let file_name = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            random_suffix(),
            extension
        );

        tokio::fs::create_dir_all(self.upload_dir).await?;
        tokio::fs::write(self.upload_dir.join(&file_name), bytes).await?;

        tracing::info!("Stored upload {} ({} bytes)", file_name, bytes.len());

        Ok(format!("{}/{}", UPLOAD_URL_PREFIX, file_name))
    }
}

fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_supported_types() {
        assert_eq!(image_extension("image/jpeg"), Some("jpg"));
        assert_eq!(image_extension("IMAGE/PNG"), Some("png"));
        assert_eq!(image_extension("image/svg+xml"), None);
        assert_eq!(image_extension("application/pdf"), None);
    }

    #[tokio::test]
    async fn writes_file_and_returns_url() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let upload_dir = dir.path().join("nested");

        let url = UploadService::new(&upload_dir, 1024)
            .save_image(Some("image/png"), b"not really a png")
            .await?;

        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        let file_name = url.trim_start_matches("/uploads/");
        let stored = tokio::fs::read(upload_dir.join(file_name)).await?;
        assert_eq!(stored, b"not really a png");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_oversized_and_unsupported_files() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let service = UploadService::new(dir.path(), 4);

        let too_big = service.save_image(Some("image/gif"), b"12345").await;
        let wrong_type = service.save_image(Some("text/plain"), b"1").await;
        let missing_type = service.save_image(None, b"1").await;

        assert!(matches!(too_big, Err(AppError::BadRequest(_))));
        assert!(matches!(wrong_type, Err(AppError::BadRequest(_))));
        assert!(matches!(missing_type, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
