//! Bearer token storage. One token per user.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::{error::is_unique_violation, model::user::User};

pub struct AuthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores `key` as the token of `user_id`.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored key
    /// - `Err(DbErr)` - Database error, including a unique violation when the user
    ///   already has a token
    pub async fn create(&self, user_id: i32, key: String) -> Result<String, DbErr> {
        let entity = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(entity.key)
    }

    pub async fn find_key_by_user(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|t| t.key))
    }

    /// Returns the user's token, storing `new_key` if they have none yet.
    ///
    /// Two concurrent logins for the same user both end up with the key that won the insert.
    pub async fn get_or_create(&self, user_id: i32, new_key: String) -> Result<String, DbErr> {
        if let Some(key) = self.find_key_by_user(user_id).await? {
            return Ok(key);
        }

        match self.create(user_id, new_key).await {
            Ok(key) => Ok(key),
            Err(err) if is_unique_violation(&err) => self
                .find_key_by_user(user_id)
                .await?
                .ok_or(err),
            Err(err) => Err(err),
        }
    }

    /// Resolves a token key to its owner.
    pub async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user).map(User::from_entity))
    }
}
