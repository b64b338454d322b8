use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::RegisterParams,
    service::auth::AuthService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod login;

fn register_params(username: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "s3cret-pass".to_string(),
    }
}
