use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the machine translation provider and the key scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No API key configured. Results in 503 Service Unavailable.
    #[error("Machine translation is not configured")]
    NotConfigured,

    /// Provider reports an exhausted quota. Results in 429 Too Many Requests.
    #[error("Translation quota exceeded")]
    QuotaExceeded,

    /// Provider throttled the request. Results in 429 Too Many Requests.
    #[error("Translation rate limit reached, please retry shortly")]
    RateLimited,

    /// Provider rejected the configured key. Results in 502 Bad Gateway.
    #[error("Translation provider rejected the API key")]
    InvalidApiKey,

    /// Any other provider failure. Results in 502 Bad Gateway.
    #[error("Translation provider error: {0}")]
    Upstream(String),

    /// Configured scan directory does not exist. Results in 400 Bad Request.
    #[error("Translation scan directory not found: {0}")]
    ScanDirectoryMissing(String),
}

impl TranslationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::QuotaExceeded | Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidApiKey | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ScanDirectoryMissing(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Upstream(detail) => {
                tracing::warn!("Translation provider error: {}", detail);
                "Translation provider error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
