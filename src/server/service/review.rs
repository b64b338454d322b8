use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{dish::DishRepository, order::OrderRepository, review::ReviewRepository},
    error::{is_unique_violation, AppError},
    model::review::{CreateReviewParams, Review},
};

const NOT_PURCHASED: &str =
    "You must have purchased and completed an order for this dish before reviewing it.";
const ALREADY_REVIEWED: &str = "You have already reviewed this dish.";

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review after checking purchase history and uniqueness.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review
    /// - `Err(AppError::NotFound)` - Dish does not exist
    /// - `Err(AppError::Validation)` - No completed order with the dish, or the user
    ///   already reviewed it
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        let txn = self.db.begin().await?;

        if DishRepository::new(&txn)
            .find_model(params.dish_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Dish not found".to_string()));
        }

        if !OrderRepository::new(&txn)
            .has_completed_order_with_dish(params.user_id, params.dish_id)
            .await?
        {
            return Err(AppError::Validation(NOT_PURCHASED.to_string()));
        }

        let reviews = ReviewRepository::new(&txn);
        if reviews.exists(params.dish_id, params.user_id).await? {
            return Err(AppError::Validation(ALREADY_REVIEWED.to_string()));
        }

        let (dish_id, user_id) = (params.dish_id, params.user_id);
        let review = reviews.create(params).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation(ALREADY_REVIEWED.to_string())
            } else {
                e.into()
            }
        })?;

        txn.commit().await?;

        tracing::info!("User {} reviewed dish {}", user_id, dish_id);

        Ok(review)
    }

    /// Lists a dish's reviews newest first. The dish may be unavailable but must exist.
    pub async fn list_for_dish(&self, dish_id: i32) -> Result<Vec<Review>, AppError> {
        if DishRepository::new(self.db)
            .find_model(dish_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Dish not found".to_string()));
        }

        Ok(ReviewRepository::new(self.db).get_by_dish(dish_id).await?)
    }
}
