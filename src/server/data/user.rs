//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::User;

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Pool or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `username` - Unique login name
    /// - `email` - Contact address, may be empty
    /// - `password_hash` - Already hashed password
    /// - `is_staff` - Whether the account has administrative rights
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        is_staff: bool,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password_hash.to_string()),
            is_staff: ActiveValue::Set(is_staff),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        Ok(self
            .find_with_password(username)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by exact username together with the stored password hash.
    ///
    /// Only the login path should need the hash.
    ///
    /// # Returns
    /// - `Ok(Some((user, hash)))` - User exists
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error
    pub async fn find_with_password(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password.clone();
            (User::from_entity(e), hash)
        }))
    }
}
