use crate::server::{
    error::AppError, model::category::CreateCategoryParams, service::category::CategoryService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
