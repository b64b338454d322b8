use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_dish;
