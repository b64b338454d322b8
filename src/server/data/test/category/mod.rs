use crate::server::data::category::CategoryRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_ids_by_name_ignore_case;
mod get_or_create;
