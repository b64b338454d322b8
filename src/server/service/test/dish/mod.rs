use crate::{
    model::dish::DishQueryDto,
    server::{
        error::AppError,
        model::{
            category::CategoryRef,
            dish::{DishFilter, DishParams, PatchDishParams},
        },
        service::dish::DishService,
    },
};
use entity::sea_orm_active_enums::DishTag;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, dish::DishFactory},
};

mod get_detail;
mod list;
mod patch;

fn params(name: &str, category: CategoryRef) -> DishParams {
    DishParams {
        name: name.to_string(),
        description: "House special".to_string(),
        price: Decimal::new(1250, 2),
        category,
        photo: None,
        rating: Decimal::ZERO,
        is_available: true,
        tags: None,
    }
}
