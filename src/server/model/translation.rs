use chrono::{DateTime, Utc};

use crate::model::translation::{
    LanguageDto, SaveTranslationDto, TranslationDto, TranslationSyncDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ar,
}

impl From<LanguageDto> for Language {
    fn from(value: LanguageDto) -> Self {
        match value {
            LanguageDto::En => Self::En,
            LanguageDto::Ar => Self::Ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub id: i32,
    pub key: String,
    pub en_text: String,
    pub ar_text: Option<String>,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Translation {
    /// Text in the requested language, falling back to English when Arabic is missing.
    pub fn text_for(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en_text,
            Language::Ar => self
                .ar_text
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or(&self.en_text),
        }
    }

    pub fn into_dto(self) -> TranslationDto {
        TranslationDto {
            id: self.id,
            key: self.key,
            en_text: self.en_text,
            ar_text: self.ar_text,
            category: self.category,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::translation::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            en_text: entity.en_text,
            ar_text: entity.ar_text,
            category: entity.category,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveTranslationParams {
    pub key: String,
    pub en_text: String,
    pub ar_text: Option<String>,
    pub category: Option<String>,
}

impl SaveTranslationParams {
    pub fn from_dto(dto: SaveTranslationDto) -> Self {
        Self {
            key: dto.key.trim().to_string(),
            en_text: dto.en_text,
            ar_text: dto.ar_text.filter(|text| !text.is_empty()),
            category: dto.category.filter(|category| !category.is_empty()),
        }
    }
}

/// Counters reported after scanning client sources for translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslationSyncReport {
    pub files_scanned: u64,
    pub keys_found: u64,
    pub keys_added: u64,
}

impl TranslationSyncReport {
    pub fn into_dto(self) -> TranslationSyncDto {
        TranslationSyncDto {
            files_scanned: self.files_scanned,
            keys_found: self.keys_found,
            keys_added: self.keys_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(ar_text: Option<&str>) -> Translation {
        Translation {
            id: 1,
            key: "nav.home".to_string(),
            en_text: "Home".to_string(),
            ar_text: ar_text.map(str::to_string),
            category: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn arabic_falls_back_to_english() {
        assert_eq!(translation(None).text_for(Language::Ar), "Home");
        assert_eq!(translation(Some("")).text_for(Language::Ar), "Home");
    }

    #[test]
    fn arabic_text_is_used_when_present() {
        assert_eq!(translation(Some("الرئيسية")).text_for(Language::Ar), "الرئيسية");
        assert_eq!(translation(Some("الرئيسية")).text_for(Language::En), "Home");
    }
}
