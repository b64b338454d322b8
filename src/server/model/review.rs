//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{error::AppError, model::user::User, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub dish_id: i32,
    pub user: User,
    pub rating: i16,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
}

impl Review {
    /// Converts a review row and its author at the repository boundary.
    pub fn from_entity(entity: entity::review::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            dish_id: entity.dish_id,
            user: User::from_entity(user),
            rating: entity.rating,
            comment: entity.comment,
            date: entity.date,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            dish: self.dish_id,
            user: self.user.into_dto(),
            rating: self.rating,
            comment: self.comment,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub dish_id: i32,
    /// Always the authenticated caller.
    pub user_id: i32,
    pub rating: i16,
    pub comment: Option<String>,
}

impl CreateReviewParams {
    /// Validates a review submission on behalf of `user_id`.
    ///
    /// A blank comment is stored as no comment.
    pub fn from_dto(user_id: i32, dto: CreateReviewDto) -> Result<Self, AppError> {
        Ok(Self {
            dish_id: dto.dish,
            user_id,
            rating: validate::review_rating(dto.rating)?,
            comment: dto.comment.filter(|c| !c.trim().is_empty()),
        })
    }
}
