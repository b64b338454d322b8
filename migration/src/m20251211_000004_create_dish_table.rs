use sea_orm_migration::{prelude::*, schema::*};

use super::m20251211_000003_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(string_len_uniq(Dish::Name, 255))
                    .col(text(Dish::Description))
                    .col(decimal_len(Dish::Price, 8, 2).check(Expr::col(Dish::Price).gte(0)))
                    .col(integer(Dish::CategoryId))
                    .col(string_null(Dish::Photo))
                    .col(
                        decimal_len(Dish::Rating, 3, 2)
                            .default(0)
                            .check(Expr::col(Dish::Rating).between(0, 5)),
                    )
                    .col(boolean(Dish::IsAvailable).default(true))
                    .col(string_len_null(Dish::Tags, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_category_id")
                            .from(Dish::Table, Dish::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    Table,
    Id,
    Name,
    Description,
    Price,
    CategoryId,
    Photo,
    Rating,
    IsAvailable,
    Tags,
}
