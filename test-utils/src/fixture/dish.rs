//! Dish fixtures for creating in-memory test data.

use entity::{dish, sea_orm_active_enums::DishTag};
use rust_decimal::Decimal;

/// Default test dish name.
pub const DEFAULT_NAME: &str = "Margherita";

/// Default test dish description.
pub const DEFAULT_DESCRIPTION: &str = "Tomato, mozzarella, basil";

/// Creates a dish entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Margherita"`
/// - price: `12.50`
/// - category_id: `1`
/// - rating: `0`
/// - is_available: `true`
/// - photo and tags: `None`
pub fn entity() -> dish::Model {
    entity_builder().build()
}

/// Creates a dish entity builder for customization.
pub fn entity_builder() -> DishEntityBuilder {
    DishEntityBuilder {
        model: dish::Model {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            price: Decimal::new(1250, 2),
            category_id: 1,
            photo: None,
            rating: Decimal::ZERO,
            is_available: true,
            tags: None,
        },
    }
}

/// Builder for in-memory dish entity models.
pub struct DishEntityBuilder {
    model: dish::Model,
}

impl DishEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.model.price = price;
        self
    }

    pub fn rating(mut self, rating: Decimal) -> Self {
        self.model.rating = rating;
        self
    }

    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.model.photo = Some(photo.into());
        self
    }

    pub fn tags(mut self, tags: Option<DishTag>) -> Self {
        self.model.tags = tags;
        self
    }

    pub fn build(self) -> dish::Model {
        self.model
    }
}
