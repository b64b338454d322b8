//! Category fixtures.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Pizza";

/// Creates a category entity model with id `1` named `"Pizza"`.
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
    }
}
