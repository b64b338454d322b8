//! Request-time field checks applied before any write.

use rust_decimal::Decimal;

use crate::server::error::AppError;

pub const DISH_NAME_MAX_LEN: usize = 255;
pub const CATEGORY_NAME_MAX_LEN: usize = 100;
pub const USERNAME_MAX_LEN: usize = 150;

/// Dish price column holds eight digits with two after the point.
const PRICE_LIMIT: i64 = 1_000_000;

pub fn dish_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Dish name may not be blank".to_string()));
    }
    if name.chars().count() > DISH_NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Dish name may not exceed {} characters",
            DISH_NAME_MAX_LEN
        )));
    }
    Ok(name.to_string())
}

pub fn category_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Category name may not be blank".to_string(),
        ));
    }
    if name.chars().count() > CATEGORY_NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Category name may not exceed {} characters",
            CATEGORY_NAME_MAX_LEN
        )));
    }
    Ok(name.to_string())
}

pub fn price(price: Decimal) -> Result<Decimal, AppError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::Validation("Price cannot be negative".to_string()));
    }
    if price.normalize().scale() > 2 {
        return Err(AppError::Validation(
            "Price may have at most 2 decimal places".to_string(),
        ));
    }
    if price >= Decimal::from(PRICE_LIMIT) {
        return Err(AppError::Validation(format!(
            "Price must be less than {}",
            PRICE_LIMIT
        )));
    }
    Ok(price)
}

pub fn dish_rating(rating: Decimal) -> Result<Decimal, AppError> {
    if rating < Decimal::ZERO || rating > Decimal::from(5) {
        return Err(AppError::Validation(
            "Rating must be between 0 and 5".to_string(),
        ));
    }
    if rating.normalize().scale() > 2 {
        return Err(AppError::Validation(
            "Rating may have at most 2 decimal places".to_string(),
        ));
    }
    Ok(rating)
}

pub fn review_rating(rating: i64) -> Result<i16, AppError> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be an integer between 1 and 5".to_string(),
        ));
    }
    Ok(rating as i16)
}

pub fn username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username may not be blank".to_string()));
    }
    if username.chars().count() > USERNAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "Username may not exceed {} characters",
            USERNAME_MAX_LEN
        )));
    }
    Ok(username.to_string())
}

pub fn password(password: &str) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::Validation("Password may not be blank".to_string()));
    }
    Ok(())
}

/// Empty or missing email is stored as an empty string.
pub fn email(email: Option<&str>) -> Result<String, AppError> {
    let email = email.map(str::trim).unwrap_or_default();
    if !email.is_empty() && !email.contains('@') {
        return Err(AppError::Validation(
            "Enter a valid email address".to_string(),
        ));
    }
    Ok(email.to_string())
}
