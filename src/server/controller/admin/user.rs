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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::admin::{deleted, not_found, require_admin},
        error::AppError,
        model::{
            pagination::PageParams,
            user::{CreateUserParams, UpdateUserParams, User},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping admin user endpoints in OpenAPI documentation
pub static ADMIN_USER_TAG: &str = "admin-users";

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedDto<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = UserService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(User::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    tag = ADMIN_USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("User"))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create an account with an explicit role.
///
/// Same username and email rules as self-registration.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user's email, name and role, and optionally set a new password.
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    tag = ADMIN_USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let user = UserService::new(&state.db)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("User"))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `400 Bad Request` - Admin tried to delete the account they are logged in with
/// - `404 Not Found` - User not found
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = ADMIN_USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = require_admin(&state, &session).await?;

    let removed = UserService::new(&state.db).delete(id, admin.id).await?;

    deleted(removed, "User")
}
