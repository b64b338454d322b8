//! Review fixtures.

use chrono::{TimeZone, Utc};
use entity::review;

/// Creates a four star review entity for dish `1` by user `1`.
pub fn entity() -> review::Model {
    review::Model {
        id: 1,
        dish_id: 1,
        user_id: 1,
        rating: 4,
        comment: Some("Tasty".to_string()),
        date: Utc.with_ymd_and_hms(2025, 1, 2, 18, 30, 0).unwrap(),
    }
}
