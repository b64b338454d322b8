//! Auth token factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a token bound to `user_id` with a unique 40 character key.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the owning user
///
/// # Returns
/// - `Ok(entity::auth_token::Model)` - Created token
/// - `Err(DbErr)` - Database error during insert
pub async fn create_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    entity::auth_token::ActiveModel {
        key: ActiveValue::Set(format!("{:040x}", next_id())),
        user_id: ActiveValue::Set(user_id),
        created: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
