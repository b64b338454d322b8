use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::AuthService,
};

pub enum Permission {
    /// Staff account, allowed to manage the menu and order statuses.
    Admin,
}

/// Resolves the caller from the `Authorization` header.
///
/// Accepts `Token <key>` and `Bearer <key>`, scheme matched case-insensitively.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires an authenticated caller holding every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Malformed header or unknown token
    /// - `Err(AuthError::AccessDenied)` - Caller lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.optional().await? else {
            return Err(AuthError::MissingToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_staff {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Staff permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the caller if one is identified.
    ///
    /// # Returns
    /// - `Ok(None)` - No `Authorization` header, anonymous caller
    /// - `Ok(Some(User))` - Valid token
    /// - `Err(AuthError::InvalidToken)` - Header present but malformed or unknown
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let key = header
            .to_str()
            .ok()
            .and_then(parse_authorization)
            .ok_or(AuthError::InvalidToken)?;

        let user = AuthService::new(self.db)
            .user_for_token(key)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(Some(user))
    }
}

/// Extracts the key from `Token <key>` or `Bearer <key>`.
fn parse_authorization(value: &str) -> Option<&str> {
    let (scheme, key) = value.trim().split_once(' ')?;
    let key = key.trim();

    let known_scheme =
        scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer");

    (known_scheme && !key.is_empty() && !key.contains(' ')).then_some(key)
}
