//! Back-office management of menus, translations and site settings.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParams},
        menu::{MenuDto, MenuItemDto, MenuWithItemsDto, SaveMenuDto, SaveMenuItemDto},
        setting::SettingsDto,
        translation::{SaveTranslationDto, TranslationDto, TranslationSyncDto},
    },
    server::{
        controller::admin::{deleted, not_found, require_admin},
        error::AppError,
        model::{
            menu::{Menu, SaveMenuItemParams, SaveMenuParams},
            pagination::PageParams,
            translation::{SaveTranslationParams, Translation},
        },
        service::{
            menu::MenuService,
            setting::SettingService,
            translation::{gemini::GeminiClient, TranslationService},
        },
        state::AppState,
    },
};

/// Tag for grouping admin content endpoints in OpenAPI documentation
pub static ADMIN_CONTENT_TAG: &str = "admin-content";

// Menus

#[utoipa::path(
    get,
    path = "/api/admin/menus",
    tag = ADMIN_CONTENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of menus", body = PaginatedDto<MenuDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_menus(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = MenuService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Menu::into_dto))))
}

/// Get a menu with its full item tree, whether or not the menu is active.
#[utoipa::path(
    get,
    path = "/api/admin/menus/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Menu ID")),
    responses(
        (status = 200, description = "Menu with nested items", body = MenuWithItemsDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let menu = MenuService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Menu"))?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/menus",
    tag = ADMIN_CONTENT_TAG,
    request_body = SaveMenuDto,
    responses(
        (status = 201, description = "Menu created", body = MenuDto),
        (status = 400, description = "Invalid menu data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let menu = MenuService::new(&state.db)
        .create(SaveMenuParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(menu.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/menus/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Menu ID")),
    request_body = SaveMenuDto,
    responses(
        (status = 200, description = "Menu updated", body = MenuDto),
        (status = 400, description = "Invalid menu data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn update_menu(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let menu = MenuService::new(&state.db)
        .update(id, SaveMenuParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Menu"))?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

/// Delete a menu together with all of its items.
#[utoipa::path(
    delete,
    path = "/api/admin/menus/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Menu ID")),
    responses(
        (status = 204, description = "Menu deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn delete_menu(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = MenuService::new(&state.db).delete(id).await?;

    deleted(removed, "Menu")
}

/// Add an item to a menu.
///
/// # Returns
/// - `201 Created` - Item added
/// - `400 Bad Request` - Invalid data or a parent from another menu
/// - `404 Not Found` - Menu not found
#[utoipa::path(
    post,
    path = "/api/admin/menus/{id}/items",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Menu ID")),
    request_body = SaveMenuItemDto,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemDto),
        (status = 400, description = "Invalid menu item", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu not found", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let item = MenuService::new(&state.db)
        .create_item(id, SaveMenuItemParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Menu"))?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/menu-items/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    request_body = SaveMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemDto),
        (status = 400, description = "Invalid menu item", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto)
    ),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let item = MenuService::new(&state.db)
        .update_item(id, SaveMenuItemParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Menu item"))?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a menu item. Its children move to the top level of the menu.
#[utoipa::path(
    delete,
    path = "/api/admin/menu-items/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = MenuService::new(&state.db).delete_item(id).await?;

    deleted(removed, "Menu item")
}

// Translations

#[utoipa::path(
    get,
    path = "/api/admin/translations",
    tag = ADMIN_CONTENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of translations ordered by key", body = PaginatedDto<TranslationDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_translations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = TranslationService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Translation::into_dto))))
}

#[utoipa::path(
    post,
    path = "/api/admin/translations",
    tag = ADMIN_CONTENT_TAG,
    request_body = SaveTranslationDto,
    responses(
        (status = 201, description = "Translation created", body = TranslationDto),
        (status = 400, description = "Invalid translation", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Key already exists", body = ErrorDto)
    ),
)]
pub async fn create_translation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTranslationDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let translation = TranslationService::new(&state.db)
        .create(SaveTranslationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(translation.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/translations/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Translation ID")),
    request_body = SaveTranslationDto,
    responses(
        (status = 200, description = "Translation updated", body = TranslationDto),
        (status = 400, description = "Invalid translation", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Translation not found", body = ErrorDto),
        (status = 409, description = "Key already exists", body = ErrorDto)
    ),
)]
pub async fn update_translation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTranslationDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let translation = TranslationService::new(&state.db)
        .update(id, SaveTranslationParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Translation"))?;

    Ok((StatusCode::OK, Json(translation.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/translations/{id}",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Translation ID")),
    responses(
        (status = 204, description = "Translation deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Translation not found", body = ErrorDto)
    ),
)]
pub async fn delete_translation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = TranslationService::new(&state.db).delete(id).await?;

    deleted(removed, "Translation")
}

/// Import translation keys used by the client sources.
///
/// Scans the configured client source directory for `t('key')` calls and inserts every
/// key that is not stored yet. Existing translations are left untouched.
///
/// # Access Control
/// - `Admin` - Only admins can sync translations
///
/// # Returns
/// - `200 OK` - Scan summary
/// - `400 Bad Request` - Scan directory missing
/// - `500 Internal Server Error` - Filesystem or database error
#[utoipa::path(
    post,
    path = "/api/admin/translations/sync",
    tag = ADMIN_CONTENT_TAG,
    responses(
        (status = 200, description = "Scan summary", body = TranslationSyncDto),
        (status = 400, description = "Scan directory missing", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_translations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let report = TranslationService::new(&state.db)
        .sync(state.config.translation_scan_dir.clone())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Fill a translation's Arabic text through the machine translation provider.
///
/// # Access Control
/// - `Admin` - Only admins can request machine translation
///
/// # Returns
/// - `200 OK` - Translation with the new Arabic text
/// - `404 Not Found` - Translation not found
/// - `429 Too Many Requests` - Provider quota exhausted or rate limit reached
/// - `502 Bad Gateway` - Provider rejected the API key or failed
/// - `503 Service Unavailable` - No API key configured
#[utoipa::path(
    post,
    path = "/api/admin/translations/{id}/machine-translate",
    tag = ADMIN_CONTENT_TAG,
    params(("id" = i32, Path, description = "Translation ID")),
    responses(
        (status = 200, description = "Arabic text stored", body = TranslationDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Translation not found", body = ErrorDto),
        (status = 429, description = "Quota exhausted or rate limited", body = ErrorDto),
        (status = 502, description = "Provider error", body = ErrorDto),
        (status = 503, description = "Machine translation not configured", body = ErrorDto)
    ),
)]
pub async fn machine_translate(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let translator = GeminiClient::from_config(&state.http_client, &state.config)?;

    let translation = TranslationService::new(&state.db)
        .machine_translate(id, &translator)
        .await?
        .ok_or_else(|| not_found("Translation"))?;

    Ok((StatusCode::OK, Json(translation.into_dto())))
}

// Settings

#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = ADMIN_CONTENT_TAG,
    responses(
        (status = 200, description = "All settings", body = SettingsDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let settings = SettingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(SettingsDto { settings })))
}

/// Upsert settings by key. Keys missing from the payload keep their value.
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = ADMIN_CONTENT_TAG,
    request_body = SettingsDto,
    responses(
        (status = 200, description = "All settings after the update", body = SettingsDto),
        (status = 400, description = "Empty setting key", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let settings = SettingService::new(&state.db)
        .update(payload.settings)
        .await?;

    Ok((StatusCode::OK, Json(SettingsDto { settings })))
}
