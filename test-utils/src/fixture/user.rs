//! User fixtures.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "olena";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "olena@example.com";

/// Creates a non-staff user entity model with id `1`.
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        username: DEFAULT_USERNAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        password: "!unusable".to_string(),
        is_staff: false,
        date_joined: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
    }
}
