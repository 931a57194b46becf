use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageDto {
    #[default]
    En,
    Ar,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct TranslationQuery {
    #[serde(default)]
    pub lang: LanguageDto,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TranslationDto {
    pub id: i32,
    pub key: String,
    pub en_text: String,
    pub ar_text: Option<String>,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TranslationMapDto {
    pub lang: LanguageDto,
    pub translations: BTreeMap<String, String>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveTranslationDto {
    #[validate(length(min = 1, max = 255))]
    pub key: String,
    #[validate(length(min = 1, message = "is required"))]
    pub en_text: String,
    pub ar_text: Option<String>,
    #[validate(length(max = 80))]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslationSyncDto {
    pub files_scanned: u64,
    pub keys_found: u64,
    pub keys_added: u64,
}
