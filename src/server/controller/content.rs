//! Public site content: navigation menus and the UI translation map.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu::MenuWithItemsDto,
        translation::{TranslationMapDto, TranslationQuery},
    },
    server::{
        error::AppError,
        service::{menu::MenuService, translation::TranslationService},
        state::AppState,
    },
};

/// Tag for grouping site content endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

/// Get the active menu for a location such as `header` or `footer`.
///
/// Items are ordered by position and nested under their parent item.
///
/// # Returns
/// - `200 OK` - Menu with its item tree
/// - `404 Not Found` - No active menu for the location
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/menus/{location}",
    tag = CONTENT_TAG,
    params(("location" = String, Path, description = "Menu location")),
    responses(
        (status = 200, description = "Menu with nested items", body = MenuWithItemsDto),
        (status = 404, description = "Menu not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let menu = MenuService::new(&state.db)
        .get_by_location(&location)
        .await?
        .ok_or_else(|| AppError::NotFound("Menu not found".to_string()))?;

    Ok((StatusCode::OK, Json(menu.into_dto())))
}

/// Get every UI string in one language.
///
/// Arabic falls back to the English text for keys that have not been translated yet.
#[utoipa::path(
    get,
    path = "/api/translations",
    tag = CONTENT_TAG,
    params(TranslationQuery),
    responses(
        (status = 200, description = "Key to text map", body = TranslationMapDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_translations(
    State(state): State<AppState>,
    Query(query): Query<TranslationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let translations = TranslationService::new(&state.db)
        .get_map(query.lang.into())
        .await?;

    Ok((
        StatusCode::OK,
        Json(TranslationMapDto {
            lang: query.lang,
            translations,
        }),
    ))
}
