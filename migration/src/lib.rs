pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_auth_token_table;
mod m20251211_000003_create_category_table;
mod m20251211_000004_create_dish_table;
mod m20251212_000005_create_order_table;
mod m20251212_000006_create_order_item_table;
mod m20251213_000007_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_auth_token_table::Migration),
            Box::new(m20251211_000003_create_category_table::Migration),
            Box::new(m20251211_000004_create_dish_table::Migration),
            Box::new(m20251212_000005_create_order_table::Migration),
            Box::new(m20251212_000006_create_order_item_table::Migration),
            Box::new(m20251213_000007_create_review_table::Migration),
        ]
    }
}
