use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251210_000001_create_user_table::User, m20251211_000004_create_dish_table::Dish};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::DishId))
                    .col(integer(Review::UserId))
                    .col(small_integer(Review::Rating).check(Expr::col(Review::Rating).between(1, 5)))
                    .col(text_null(Review::Comment))
                    .col(timestamp_with_time_zone(Review::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_dish_id")
                            .from(Review::Table, Review::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_dish_user")
                    .table(Review::Table)
                    .col(Review::DishId)
                    .col(Review::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    DishId,
    UserId,
    Rating,
    Comment,
    Date,
}
