//! Extraction of translation keys from client source files.
//!
//! Recognizes `t('key')` and `t("key", "Default text")` calls in `.ts`, `.tsx`, `.js`
//! and `.jsx` files. `node_modules` and hidden directories are skipped.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use regex::Regex;

use crate::server::error::{translation::TranslationError, AppError};

/// Key in groups 1/2 and default text in groups 3/4, double or single quoted. The closing
/// quote must match the opening one so apostrophes survive inside double quotes.
const TRANSLATION_CALL_PATTERN: &str = r#"\bt\(\s*(?:"([^"\n]+)"|'([^'\n]+)')(?:\s*,\s*(?:"([^"\n]*)"|'([^'\n]*)'))?"#;

const SOURCE_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    pub files_scanned: u64,
    /// Key to English text: the first default text seen, or the key itself.
    pub keys: BTreeMap<String, String>,
}

/// Walks `root` and collects every translation key used by the client.
///
/// Blocking; run it on the blocking thread pool.
///
/// # Returns
/// - `Ok(ScanResult)` - Files scanned and the keys found
/// - `Err(TranslationError::ScanDirectoryMissing)` - `root` is not a directory
/// - `Err(AppError::IoErr)` - A directory could not be listed
pub fn scan_directory(root: &Path) -> Result<ScanResult, AppError> {
    if !root.is_dir() {
        return Err(TranslationError::ScanDirectoryMissing(root.display().to_string()).into());
    }

    let pattern = Regex::new(TRANSLATION_CALL_PATTERN)
        .map_err(|e| AppError::InternalError(format!("Invalid translation pattern: {}", e)))?;

    let mut result = ScanResult::default();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                if !is_skipped_dir(&path) {
                    pending.push(path);
                }
                continue;
            }

            if !file_type.is_file() || !is_source_file(&path) {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(source) => {
                    result.files_scanned += 1;
                    collect_keys(&pattern, &source, &mut result.keys);
                }
                Err(e) => tracing::warn!("Skipping unreadable file {}: {}", path.display(), e),
            }
        }
    }

    Ok(result)
}

fn collect_keys(pattern: &Regex, source: &str, keys: &mut BTreeMap<String, String>) {
    for captures in pattern.captures_iter(source) {
        let Some(key) = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().trim())
        else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let default_text = captures
            .get(3)
            .or_else(|| captures.get(4))
            .map(|m| m.as_str().trim())
            .filter(|text| !text.is_empty())
            .unwrap_or(key);

        keys.entry(key.to_string())
            .or_insert_with(|| default_text.to_string());
    }
}

fn is_skipped_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_in(source: &str) -> BTreeMap<String, String> {
        let pattern = Regex::new(TRANSLATION_CALL_PATTERN).unwrap();
        let mut keys = BTreeMap::new();
        collect_keys(&pattern, source, &mut keys);
        keys
    }

    #[test]
    fn extracts_keys_and_defaults() {
        let keys = keys_in(
            r#"
            <h1>{t('home.title')}</h1>
            <p>{t("home.subtitle", "Plan your next trip")}</p>
            const label = t( 'cart.empty' , 'Your cart is empty' );
            "#,
        );

        assert_eq!(keys.get("home.title").map(String::as_str), Some("home.title"));
        assert_eq!(
            keys.get("home.subtitle").map(String::as_str),
            Some("Plan your next trip")
        );
        assert_eq!(
            keys.get("cart.empty").map(String::as_str),
            Some("Your cart is empty")
        );
    }

    #[test]
    fn ignores_similar_calls() {
        let keys = keys_in("format(x); split('a'); at('b'); t(variable);");

        assert!(keys.is_empty());
    }

    #[test]
    fn keeps_apostrophes_in_double_quoted_defaults() {
        let keys = keys_in(
            r#"t("auth.noAccount", "Don't have an account?") t('nav.faq', "FAQ's page")"#,
        );

        assert_eq!(
            keys.get("auth.noAccount").map(String::as_str),
            Some("Don't have an account?")
        );
        assert_eq!(keys.get("nav.faq").map(String::as_str), Some("FAQ's page"));
    }

    #[test]
    fn mismatched_quotes_are_not_a_call() {
        let keys = keys_in(r#"t("broken.key')"#);

        assert!(keys.is_empty());
    }

    #[test]
    fn first_default_wins() {
        let keys = keys_in(r#"t("nav.tours", "Tours") t("nav.tours", "Trips")"#);

        assert_eq!(keys.get("nav.tours").map(String::as_str), Some("Tours"));
    }

    #[test]
    fn walks_sources_and_skips_vendor_dirs() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let root = dir.path();
        fs::create_dir_all(root.join("pages/cart"))?;
        fs::create_dir_all(root.join("node_modules/lib"))?;
        fs::create_dir_all(root.join(".cache"))?;

        fs::write(root.join("App.tsx"), "t('app.name', 'TripDesk')")?;
        fs::write(root.join("pages/cart/Cart.jsx"), "t(\"cart.title\")")?;
        fs::write(root.join("pages/notes.md"), "t('docs.only')")?;
        fs::write(root.join("node_modules/lib/index.js"), "t('vendor.key')")?;
        fs::write(root.join(".cache/tmp.ts"), "t('cached.key')")?;

        let result = scan_directory(root)?;

        assert_eq!(result.files_scanned, 2);
        assert_eq!(
            result.keys.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["app.name", "cart.title"]
        );

        Ok(())
    }

    #[test]
    fn missing_directory_is_reported() {
        let result = scan_directory(Path::new("/definitely/not/here"));

        assert!(matches!(
            result,
            Err(AppError::TranslationErr(
                TranslationError::ScanDirectoryMissing(_)
            ))
        ));
    }
}
