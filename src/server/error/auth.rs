use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization` header but the endpoint needs a caller.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// The `Authorization` header is malformed or names an unknown token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token")]
    InvalidToken,

    /// The caller is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The inner values are the user id and a
    /// description of the attempted action, logged at debug level only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Username and password do not match a stored account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidCredentials`
/// - 401 Unauthorized - For `MissingToken` and `InvalidToken`
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token."),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
