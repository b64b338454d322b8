use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    category::{CategoryDto, CategoryRefDto},
    review::ReviewDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DishTagDto {
    Spicy,
    Sweet,
    Vegan,
    Meat,
}

/// Abbreviated dish shape used by the menu listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishListItemDto {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub category: CategoryDto,
    pub rating: Decimal,
    pub is_available: bool,
    pub photo: Option<String>,
    pub tags: Option<DishTagDto>,
}

/// Full dish shape including description and reviews, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishDetailDto {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub category: CategoryDto,
    pub rating: Decimal,
    pub is_available: bool,
    pub photo: Option<String>,
    pub tags: Option<DishTagDto>,
    pub description: String,
    pub reviews: Vec<ReviewDto>,
}

/// Full dish payload for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DishPayloadDto {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: CategoryRefDto,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub is_available: Option<bool>,
    /// Tag code, case-insensitive (`SPICY`, `SWEET`, `VEGAN`, `MEAT`).
    #[serde(default)]
    pub tags: Option<String>,
}

/// Partial dish payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatchDishDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<CategoryRefDto>,
    pub photo: Option<String>,
    pub rating: Option<Decimal>,
    pub is_available: Option<bool>,
    pub tags: Option<String>,
}

/// Menu listing filters. Values are kept raw so malformed input can be ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DishQueryDto {
    /// Category name, case-insensitive exact match.
    pub category: Option<String>,
    /// Inclusive upper price bound; ignored when not a number.
    pub max_price: Option<String>,
    /// Comma separated tag codes, case-insensitive.
    pub tags: Option<String>,
    /// One of `price`, `-price`, `rating`, `-rating`, `name`, `-name`.
    pub ordering: Option<String>,
}
