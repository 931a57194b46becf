//! Machine translation through the Gemini `generateContent` API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::server::{config::Config, error::translation::TranslationError};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Translates English UI text to Arabic.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate_to_arabic(&self, text: &str) -> Result<String, TranslationError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiClient<'a> {
    http_client: &'a reqwest::Client,
    api_key: &'a str,
    model: &'a str,
}

impl<'a> GeminiClient<'a> {
    /// Builds a client from configuration.
    ///
    /// # Returns
    /// - `Ok(GeminiClient)` - API key is configured
    /// - `Err(TranslationError::NotConfigured)` - `GEMINI_API_KEY` is unset
    pub fn from_config(
        http_client: &'a reqwest::Client,
        config: &'a Config,
    ) -> Result<Self, TranslationError> {
        let api_key = config
            .gemini_api_key
            .as_deref()
            .ok_or(TranslationError::NotConfigured)?;

        Ok(Self {
            http_client,
            api_key,
            model: &config.gemini_model,
        })
    }
}

impl Translator for GeminiClient<'_> {
    async fn translate_to_arabic(&self, text: &str) -> Result<String, TranslationError> {
        let prompt = format!(
            "Translate the following English website text to Arabic. \
             Reply with the translation only, without quotes or explanations.\n\n{}",
            text
        );
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &prompt }],
            }],
        };

        let response = self
            .http_client
            .post(format!("{}/{}:generateContent", GEMINI_BASE_URL, self.model))
            .query(&[("key", self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::Upstream(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::Upstream(e.without_url().to_string()))?;

        extract_text(parsed)
    }
}

/// Maps a failed provider response to a translation error class.
pub fn classify_failure(status: StatusCode, body: &str) -> TranslationError {
    let lowered = body.to_ascii_lowercase();

    match status {
        StatusCode::TOO_MANY_REQUESTS if lowered.contains("quota") => {
            TranslationError::QuotaExceeded
        }
        StatusCode::TOO_MANY_REQUESTS => TranslationError::RateLimited,
        StatusCode::BAD_REQUEST
            if body.contains("API_KEY_INVALID") || lowered.contains("api key not valid") =>
        {
            TranslationError::InvalidApiKey
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranslationError::InvalidApiKey,
        _ => TranslationError::Upstream(format!("HTTP {}: {}", status.as_u16(), truncate(body))),
    }
}

fn extract_text(response: GenerateResponse) -> Result<String, TranslationError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| TranslationError::Upstream("Response contained no text".to_string()))
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_quota_and_rate_limits() {
        assert_eq!(
            classify_failure(
                StatusCode::TOO_MANY_REQUESTS,
                r#"{"error":{"message":"You exceeded your current quota"}}"#
            ),
            TranslationError::QuotaExceeded
        );
        assert_eq!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            TranslationError::RateLimited
        );
    }

    #[test]
    fn classifies_invalid_keys() {
        assert_eq!(
            classify_failure(
                StatusCode::BAD_REQUEST,
                r#"{"error":{"status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#
            ),
            TranslationError::InvalidApiKey
        );
        assert_eq!(
            classify_failure(StatusCode::BAD_REQUEST, "API key not valid. Please pass a valid API key."),
            TranslationError::InvalidApiKey
        );
        assert_eq!(
            classify_failure(StatusCode::FORBIDDEN, ""),
            TranslationError::InvalidApiKey
        );
    }

    #[test]
    fn other_failures_are_upstream() {
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, "malformed request"),
            TranslationError::Upstream(_)
        ));
        assert!(matches!(
            classify_failure(StatusCode::SERVICE_UNAVAILABLE, "overloaded"),
            TranslationError::Upstream(_)
        ));
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  مرحبا \n"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "مرحبا");
    }

    #[test]
    fn empty_response_is_upstream_error() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();

        assert!(matches!(
            extract_text(response),
            Err(TranslationError::Upstream(_))
        ));
    }
}
