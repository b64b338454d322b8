use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthResponseDto, CurrentUserDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        extract::ApiJson,
        middleware::auth::AuthGuard,
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with a hashed password and issues its token.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, optional email and password
///
/// # Returns
/// - `201 Created` - Token and public profile of the new user
/// - `400 Bad Request` - Invalid fields or username already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/register/",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let session = AuthService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Log in with username and password.
///
/// Returns the user's token, creating it on first login.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token, public profile and staff flag
/// - `400 Bad Request` - Invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/login/",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Get the profile of the authenticated caller.
///
/// # Access Control
/// - Authenticated
///
/// # Returns
/// - `200 OK` - Profile including the staff flag
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/me/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = CurrentUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_current_dto())))
}
