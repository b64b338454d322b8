use sea_orm::entity::prelude::*;

/// Optional dietary/flavour marker attached to a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DishTag {
    #[sea_orm(string_value = "SPICY")]
    Spicy,
    #[sea_orm(string_value = "SWEET")]
    Sweet,
    #[sea_orm(string_value = "VEGAN")]
    Vegan,
    #[sea_orm(string_value = "MEAT")]
    Meat,
}

/// Workflow position of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}
