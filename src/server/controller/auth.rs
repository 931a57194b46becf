use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CartSession},
        },
        model::user::{RegisterParams, User},
        service::{auth::AuthService, cart::CartService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account and logs it in. Presenting the admin setup code printed at
/// startup grants the admin role and consumes the code. Any guest cart held by the
/// session is moved to the new account.
///
/// # Returns
/// - `201 Created` - Account created and logged in
/// - `400 Bad Request` - Invalid payload or invalid admin code
/// - `409 Conflict` - Username or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.admin_code_service);
    let user = service.register(RegisterParams::from_dto(payload)).await?;

    start_session(&state, &session, &user).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// The session ID is cycled on success and the guest cart is merged into the user's
/// cart.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = AuthService::new(&state.db, &state.admin_code_service);
    let user = service.login(&payload.username, payload.password).await?;

    start_session(&state, &session, &user).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Nobody is logged in
#[utoipa::path(
    get,
    path = "/api/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Binds the session to `user`, cycling its ID, and moves any guest cart over.
async fn start_session(state: &AppState, session: &Session, user: &User) -> Result<(), AppError> {
    let guest_token = CartSession::new(session).take_guest_token().await?;

    let auth_session = AuthSession::new(session);
    auth_session.cycle_id().await?;
    auth_session.set_user_id(user.id).await?;

    if let Some(token) = guest_token {
        CartService::new(&state.db)
            .merge_guest_cart(&token, user.id)
            .await?;
    }

    tracing::info!("User {} logged in", user.username);

    Ok(())
}
