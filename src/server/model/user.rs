//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{AuthResponseDto, CurrentUserDto, RegisterDto, UserDto},
    server::{error::AppError, util::validate},
};

/// Account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password hash is dropped here and never travels further.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_staff: entity.is_staff,
            date_joined: entity.date_joined,
        }
    }

    /// Converts the user to its public projection.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }

    /// Converts the user to the profile returned by `GET /api/me/`.
    pub fn into_current_dto(self) -> CurrentUserDto {
        CurrentUserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_staff: self.is_staff,
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterParams {
    /// Validates a registration payload.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Username trimmed, email normalized to empty when absent
    /// - `Err(AppError::Validation)` - Blank or oversized username, blank password, or
    ///   malformed email
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let username = validate::username(&dto.username)?;
        validate::password(&dto.password)?;
        let email = validate::email(dto.email.as_deref())?;

        Ok(Self {
            username,
            email,
            password: dto.password,
        })
    }
}

/// Token issued to a user by register or login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl AuthSession {
    pub fn into_dto(self) -> AuthResponseDto {
        let is_staff = self.user.is_staff;

        AuthResponseDto {
            token: self.token,
            user: self.user.into_dto(),
            is_staff,
        }
    }
}
