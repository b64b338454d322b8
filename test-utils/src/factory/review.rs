//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating reviews.
///
/// Inserts directly, bypassing the purchase eligibility rule enforced by the service.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    dish_id: i32,
    user_id: i32,
    rating: i16,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with rating `5` and no comment.
    pub fn new(db: &'a DatabaseConnection, dish_id: i32, user_id: i32) -> Self {
        Self {
            db,
            dish_id,
            user_id,
            rating: 5,
            comment: None,
        }
    }

    pub fn rating(mut self, rating: i16) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builds and inserts the review.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            dish_id: ActiveValue::Set(self.dish_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a five star review without a comment.
pub async fn create_review(
    db: &DatabaseConnection,
    dish_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, dish_id, user_id).build().await
}
