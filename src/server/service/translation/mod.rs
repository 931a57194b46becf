//! UI translations: the public language map, admin editing, source key sync and
//! machine translation of missing Arabic text.

pub mod gemini;
pub mod scan;

use std::{collections::BTreeMap, path::PathBuf};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::translation::TranslationRepository,
    error::{internal::InternalError, AppError},
    model::{
        pagination::{PageParams, Paginated},
        translation::{Language, SaveTranslationParams, Translation, TranslationSyncReport},
    },
    service::translation::gemini::Translator,
};

pub struct TranslationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TranslationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the key to text map served to the client for `language`.
    ///
    /// Keys without Arabic text fall back to English.
    pub async fn get_map(&self, language: Language) -> Result<BTreeMap<String, String>, AppError> {
        let translations = TranslationRepository::new(self.db).get_all().await?;

        Ok(translations
            .iter()
            .map(|t| (t.key.clone(), t.text_for(language).to_string()))
            .collect())
    }

    pub async fn get_paginated(
        &self,
        page: PageParams,
    ) -> Result<Paginated<Translation>, AppError> {
        let (translations, total) = TranslationRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(translations, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Translation>, AppError> {
        Ok(TranslationRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: SaveTranslationParams) -> Result<Translation, AppError> {
        Self::ensure_key(&params)?;

        Ok(TranslationRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveTranslationParams,
    ) -> Result<Option<Translation>, AppError> {
        Self::ensure_key(&params)?;

        Ok(TranslationRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TranslationRepository::new(self.db).delete(id).await?)
    }

    /// Scans `scan_dir` for translation keys and stores the ones not yet known.
    ///
    /// Existing rows are never modified, so edited English or Arabic text survives a sync.
    ///
    /// # Returns
    /// - `Ok(TranslationSyncReport)` - Files scanned, keys found and keys added
    /// - `Err(AppError::TranslationErr)` - Scan directory does not exist
    /// - `Err(AppError::DbErr)` - Database error reading or inserting keys
    pub async fn sync(&self, scan_dir: PathBuf) -> Result<TranslationSyncReport, AppError> {
        let scanned = tokio::task::spawn_blocking(move || scan::scan_directory(&scan_dir))
            .await
            .map_err(InternalError::from)??;

        let repo = TranslationRepository::new(self.db);
        let existing = repo.existing_keys().await?;

        let keys_found = scanned.keys.len() as u64;
        let missing: Vec<(String, String)> = scanned
            .keys
            .into_iter()
            .filter(|(key, _)| !existing.contains(key))
            .collect();
        let keys_added = missing.len() as u64;

        repo.insert_missing(missing).await?;

        tracing::info!(
            "Translation sync scanned {} files, found {} keys, added {}",
            scanned.files_scanned,
            keys_found,
            keys_added
        );

        Ok(TranslationSyncReport {
            files_scanned: scanned.files_scanned,
            keys_found,
            keys_added,
        })
    }

    /// Fills the Arabic text of a translation from its English text.
    ///
    /// # Returns
    /// - `Ok(Some(Translation))` - Translation updated with the machine translated text
    /// - `Ok(None)` - No translation with that ID
    /// - `Err(AppError::TranslationErr)` - Provider failure, classified by cause
    pub async fn machine_translate<T: Translator>(
        &self,
        id: i32,
        translator: &T,
    ) -> Result<Option<Translation>, AppError> {
        let repo = TranslationRepository::new(self.db);
        let Some(translation) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let ar_text = translator.translate_to_arabic(&translation.en_text).await?;

        Ok(repo.set_ar_text(id, ar_text).await?)
    }

    fn ensure_key(params: &SaveTranslationParams) -> Result<(), AppError> {
        if params.key.is_empty() {
            return Err(AppError::BadRequest(
                "Translation key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::translation::TranslationError;
    use test_utils::{builder::TestBuilder, factory};

    struct FixedTranslator(Result<&'static str, TranslationError>);

    impl Translator for FixedTranslator {
        async fn translate_to_arabic(&self, _text: &str) -> Result<String, TranslationError> {
            self.0.clone().map(str::to_string)
        }
    }

    /// Expected: Arabic map falls back to English for keys without Arabic text
    #[tokio::test]
    async fn arabic_map_falls_back_to_english() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::translation::create_translation(db, "nav.home", "Home", Some("الرئيسية".into()))
            .await?;
        factory::translation::create_translation(db, "nav.tours", "Tours", None).await?;

        let map = TranslationService::new(db).get_map(Language::Ar).await?;

        assert_eq!(map.get("nav.home").map(String::as_str), Some("الرئيسية"));
        assert_eq!(map.get("nav.tours").map(String::as_str), Some("Tours"));

        Ok(())
    }

    /// Expected: only unknown keys are inserted and existing text is untouched
    #[tokio::test]
    async fn sync_adds_only_missing_keys() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::translation::create_translation(db, "nav.home", "Start", Some("البداية".into()))
            .await?;

        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("Nav.tsx"),
            "t('nav.home', 'Home'); t('nav.cart', 'Cart'); t('nav.login')",
        )?;

        let service = TranslationService::new(db);
        let report = service.sync(dir.path().to_path_buf()).await?;

        assert_eq!(
            report,
            TranslationSyncReport {
                files_scanned: 1,
                keys_found: 3,
                keys_added: 2,
            }
        );

        let map = service.get_map(Language::En).await?;
        assert_eq!(map.get("nav.home").map(String::as_str), Some("Start"));
        assert_eq!(map.get("nav.cart").map(String::as_str), Some("Cart"));
        assert_eq!(map.get("nav.login").map(String::as_str), Some("nav.login"));

        let again = service.sync(dir.path().to_path_buf()).await?;
        assert_eq!(again.keys_added, 0);

        Ok(())
    }

    /// Expected: TranslationErr when the scan directory is missing
    #[tokio::test]
    async fn sync_fails_for_missing_directory() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = TranslationService::new(db)
            .sync(PathBuf::from("/no/such/client/src"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::TranslationErr(
                TranslationError::ScanDirectoryMissing(_)
            ))
        ));

        Ok(())
    }

    /// Expected: Arabic text stored on success, provider error propagated on failure
    #[tokio::test]
    async fn machine_translate_stores_arabic_text() -> Result<(), AppError> {
        let test = TestBuilder::new().with_content_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let row = factory::translation::create_translation(db, "cart.title", "Cart", None).await?;

        let service = TranslationService::new(db);
        let updated = service
            .machine_translate(row.id, &FixedTranslator(Ok("السلة")))
            .await?
            .unwrap();
        assert_eq!(updated.ar_text.as_deref(), Some("السلة"));

        let missing = service
            .machine_translate(row.id + 100, &FixedTranslator(Ok("x")))
            .await?;
        assert!(missing.is_none());

        let failed = service
            .machine_translate(row.id, &FixedTranslator(Err(TranslationError::QuotaExceeded)))
            .await;
        assert!(matches!(
            failed,
            Err(AppError::TranslationErr(TranslationError::QuotaExceeded))
        ));

        Ok(())
    }
}
