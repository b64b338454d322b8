//! Dish factory for creating test dish entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::DishTag;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let dish = DishFactory::new(&db, category.id)
///     .price(Decimal::new(999, 2))
///     .available(false)
///     .build()
///     .await?;
/// ```
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    description: String,
    price: Decimal,
    photo: Option<String>,
    rating: Decimal,
    is_available: bool,
    tags: Option<DishTag>,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"`
    /// - description: `"Test description"`
    /// - price: `10.00`
    /// - rating: `0.00`
    /// - is_available: `true`
    /// - photo and tags: `None`
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        Self {
            db,
            category_id,
            name: format!("Dish {}", next_id()),
            description: "Test description".to_string(),
            price: Decimal::new(1000, 2),
            photo: None,
            rating: Decimal::ZERO,
            is_available: true,
            tags: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn photo(mut self, photo: Option<String>) -> Self {
        self.photo = photo;
        self
    }

    pub fn rating(mut self, rating: Decimal) -> Self {
        self.rating = rating;
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn tags(mut self, tags: Option<DishTag>) -> Self {
        self.tags = tags;
        self
    }

    /// Builds and inserts the dish entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dish::Model)` - Created dish entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        entity::dish::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            category_id: ActiveValue::Set(self.category_id),
            photo: ActiveValue::Set(self.photo),
            rating: ActiveValue::Set(self.rating),
            is_available: ActiveValue::Set(self.is_available),
            tags: ActiveValue::Set(self.tags),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available dish with default values in the given category.
pub async fn create_dish(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db, category_id).build().await
}
