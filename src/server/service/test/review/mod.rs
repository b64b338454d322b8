use crate::server::{
    error::AppError, model::review::CreateReviewParams, service::review::ReviewService,
};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory},
};

mod list_for_dish;

fn params(dish_id: i32, user_id: i32) -> CreateReviewParams {
    CreateReviewParams {
        dish_id,
        user_id,
        rating: 4,
        comment: Some("Would order again".to_string()),
    }
}
