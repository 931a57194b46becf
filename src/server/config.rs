use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_TRANSLATION_SCAN_DIR: &str = "client/src";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_CART_RETENTION_DAYS: i64 = 30;
const MAX_CART_RETENTION_DAYS: i64 = 3650;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    pub translation_scan_dir: PathBuf,
    /// Machine translation is disabled when unset.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,

    /// Guest cart items older than this are purged by the hourly cleanup job.
    pub cart_retention_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: env_or("APP_URL", DEFAULT_APP_URL),
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            translation_scan_dir: PathBuf::from(env_or(
                "TRANSLATION_SCAN_DIR",
                DEFAULT_TRANSLATION_SCAN_DIR,
            )),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            cart_retention_days: retention_days(parse_env(
                "CART_RETENTION_DAYS",
                DEFAULT_CART_RETENTION_DAYS,
            )?)?,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        }
        _ => Ok(default),
    }
}

/// Guest carts are kept between one day and ten years.
fn retention_days(days: i64) -> Result<i64, ConfigError> {
    if (1..=MAX_CART_RETENTION_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "CART_RETENTION_DAYS".to_string(),
            value: days.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cart_retention() {
        assert_eq!(retention_days(1).ok(), Some(1));
        assert_eq!(retention_days(MAX_CART_RETENTION_DAYS).ok(), Some(MAX_CART_RETENTION_DAYS));
        assert!(retention_days(0).is_err());
        assert!(retention_days(i64::MAX).is_err());
    }
}
