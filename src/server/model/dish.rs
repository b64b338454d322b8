//! Dish domain models, filters and parameters.
//!
//! The list and detail views are separate conversions: `Dish::into_list_dto` drops the
//! description and reviews, `DishDetail::into_dto` carries both.

use entity::sea_orm_active_enums::DishTag;
use rust_decimal::Decimal;

use crate::{
    model::dish::{
        DishDetailDto, DishListItemDto, DishPayloadDto, DishQueryDto, DishTagDto, PatchDishDto,
    },
    server::{
        error::AppError,
        model::{
            category::{Category, CategoryRef},
            review::Review,
        },
        util::{money::to_cents, parse::parse_decimal_lenient, validate},
    },
};

/// Parses a tag code, ignoring case and surrounding whitespace.
pub fn parse_tag(code: &str) -> Option<DishTag> {
    match code.trim().to_ascii_uppercase().as_str() {
        "SPICY" => Some(DishTag::Spicy),
        "SWEET" => Some(DishTag::Sweet),
        "VEGAN" => Some(DishTag::Vegan),
        "MEAT" => Some(DishTag::Meat),
        _ => None,
    }
}

pub fn tag_into_dto(tag: DishTag) -> DishTagDto {
    match tag {
        DishTag::Spicy => DishTagDto::Spicy,
        DishTag::Sweet => DishTagDto::Sweet,
        DishTag::Vegan => DishTagDto::Vegan,
        DishTag::Meat => DishTagDto::Meat,
    }
}

/// Parses an optional tag field of a write payload. An empty string clears the tag.
fn parse_tag_field(value: Option<&str>) -> Result<Option<DishTag>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => parse_tag(code).map(Some).ok_or_else(|| {
            AppError::Validation(format!(
                "'{}' is not a valid tag. Valid values: SPICY, SWEET, VEGAN, MEAT",
                code
            ))
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub photo: Option<String>,
    pub rating: Decimal,
    pub is_available: bool,
    pub tags: Option<DishTag>,
}

impl Dish {
    /// Converts a dish row and its owning category at the repository boundary.
    pub fn from_entity(entity: entity::dish::Model, category: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            category: Category::from_entity(category),
            photo: entity.photo,
            rating: entity.rating,
            is_available: entity.is_available,
            tags: entity.tags,
        }
    }

    pub fn into_list_dto(self) -> DishListItemDto {
        DishListItemDto {
            id: self.id,
            name: self.name,
            price: to_cents(self.price),
            category: self.category.into_dto(),
            rating: to_cents(self.rating),
            is_available: self.is_available,
            photo: self.photo,
            tags: self.tags.map(tag_into_dto),
        }
    }
}

/// Dish together with its reviews, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct DishDetail {
    pub dish: Dish,
    pub reviews: Vec<Review>,
}

impl DishDetail {
    pub fn into_dto(self) -> DishDetailDto {
        let dish = self.dish;

        DishDetailDto {
            id: dish.id,
            name: dish.name,
            price: to_cents(dish.price),
            category: dish.category.into_dto(),
            rating: to_cents(dish.rating),
            is_available: dish.is_available,
            photo: dish.photo,
            tags: dish.tags.map(tag_into_dto),
            description: dish.description,
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DishOrdering {
    #[default]
    Id,
    PriceAsc,
    PriceDesc,
    RatingAsc,
    RatingDesc,
    NameAsc,
    NameDesc,
}

impl DishOrdering {
    /// Unknown values fall back to ordering by id.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price" => Self::PriceAsc,
            "-price" => Self::PriceDesc,
            "rating" => Self::RatingAsc,
            "-rating" => Self::RatingDesc,
            "name" => Self::NameAsc,
            "-name" => Self::NameDesc,
            _ => Self::Id,
        }
    }
}

/// Menu listing filters after lenient parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishFilter {
    /// Category name compared case-insensitively.
    pub category: Option<String>,
    /// Inclusive price bound. Unparsable input leaves this unset.
    pub max_price: Option<Decimal>,
    /// Accepted tags. `Some` with an empty list matches nothing.
    pub tags: Option<Vec<DishTag>>,
    pub ordering: DishOrdering,
}

impl DishFilter {
    pub fn from_query(query: DishQueryDto) -> Self {
        let category = query
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let max_price = query.max_price.as_deref().and_then(parse_decimal_lenient);

        let tags = query
            .tags
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.split(',').filter_map(parse_tag).collect::<Vec<_>>());

        let ordering = query
            .ordering
            .as_deref()
            .map(DishOrdering::parse)
            .unwrap_or_default();

        Self {
            category,
            max_price,
            tags,
            ordering,
        }
    }
}

/// Column values written for a dish once its category has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DishValues {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    pub photo: Option<String>,
    pub rating: Decimal,
    pub is_available: bool,
    pub tags: Option<DishTag>,
}

impl DishValues {
    pub fn from_entity(entity: &entity::dish::Model) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone(),
            price: entity.price,
            category_id: entity.category_id,
            photo: entity.photo.clone(),
            rating: entity.rating,
            is_available: entity.is_available,
            tags: entity.tags,
        }
    }
}

/// Validated create or replace payload.
#[derive(Debug, Clone)]
pub struct DishParams {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: CategoryRef,
    pub photo: Option<String>,
    pub rating: Decimal,
    pub is_available: bool,
    pub tags: Option<DishTag>,
}

impl DishParams {
    /// Validates a full dish payload. Omitted optional fields take their defaults:
    /// rating 0, available, no photo, no tag.
    pub fn from_dto(dto: DishPayloadDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::dish_name(&dto.name)?,
            description: dto.description,
            price: validate::price(dto.price)?,
            category: CategoryRef::from_dto(dto.category)?,
            photo: dto.photo.filter(|p| !p.trim().is_empty()),
            rating: validate::dish_rating(dto.rating.unwrap_or(Decimal::ZERO))?,
            is_available: dto.is_available.unwrap_or(true),
            tags: parse_tag_field(dto.tags.as_deref())?,
        })
    }

    pub fn into_values(self, category_id: i32) -> DishValues {
        DishValues {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id,
            photo: self.photo,
            rating: self.rating,
            is_available: self.is_available,
            tags: self.tags,
        }
    }
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PatchDishParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<CategoryRef>,
    /// `Some(None)` clears the photo.
    pub photo: Option<Option<String>>,
    pub rating: Option<Decimal>,
    pub is_available: Option<bool>,
    /// `Some(None)` clears the tag.
    pub tags: Option<Option<DishTag>>,
}

impl PatchDishParams {
    pub fn from_dto(dto: PatchDishDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.as_deref().map(validate::dish_name).transpose()?,
            description: dto.description,
            price: dto.price.map(validate::price).transpose()?,
            category: dto.category.map(CategoryRef::from_dto).transpose()?,
            photo: dto
                .photo
                .map(|p| Some(p).filter(|p| !p.trim().is_empty())),
            rating: dto.rating.map(validate::dish_rating).transpose()?,
            is_available: dto.is_available,
            tags: dto
                .tags
                .map(|t| parse_tag_field(Some(t.as_str())))
                .transpose()?,
        })
    }

    /// Applies the supplied fields on top of the stored values.
    pub fn apply(self, mut values: DishValues, category_id: Option<i32>) -> DishValues {
        if let Some(name) = self.name {
            values.name = name;
        }
        if let Some(description) = self.description {
            values.description = description;
        }
        if let Some(price) = self.price {
            values.price = price;
        }
        if let Some(category_id) = category_id {
            values.category_id = category_id;
        }
        if let Some(photo) = self.photo {
            values.photo = photo;
        }
        if let Some(rating) = self.rating {
            values.rating = rating;
        }
        if let Some(is_available) = self.is_available {
            values.is_available = is_available;
        }
        if let Some(tags) = self.tags {
            values.tags = tags;
        }
        values
    }
}
