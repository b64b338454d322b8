use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub dish: i32,
    pub user: UserDto,
    pub rating: i16,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
}

/// Review submission. The author is always the authenticated caller.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateReviewDto {
    pub dish: i32,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}
