//! Review data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review timestamped now and returns it with its author.
    ///
    /// # Returns
    /// - `Ok(Review)` - Created review
    /// - `Err(DbErr)` - Database error, including a unique violation when the user already
    ///   reviewed the dish
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            dish_id: ActiveValue::Set(params.dish_id),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Author {} of review missing", entity.user_id))
            })?;

        Ok(Review::from_entity(entity, user))
    }

    /// Gets the reviews of a dish, newest first.
    pub async fn get_by_dish(&self, dish_id: i32) -> Result<Vec<Review>, DbErr> {
        let rows = entity::prelude::Review::find()
            .filter(entity::review::Column::DishId.eq(dish_id))
            .order_by_desc(entity::review::Column::Date)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(review, user)| {
                let user = user.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Author {} of review missing", review.user_id))
                })?;
                Ok(Review::from_entity(review, user))
            })
            .collect()
    }

    pub async fn exists(&self, dish_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::DishId.eq(dish_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
