use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoryDto, CategoryRefDto, CreateCategoryDto},
        dish::{DishDetailDto, DishListItemDto, DishPayloadDto, DishTagDto, PatchDishDto},
        order::{
            CreateOrderDto, CreateOrderItemDto, OrderDto, OrderItemDto, OrderStatusDto,
            UpdateOrderStatusDto,
        },
        review::{CreateReviewDto, ReviewDto},
        user::{AuthResponseDto, CurrentUserDto, LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::{
            auth::{self, login, me, register},
            category::{self, create_category, delete_category, get_categories},
            dish::{self, create_dish, delete_dish, get_dish, get_dishes, patch_dish, replace_dish},
            order::{
                self, create_order, delete_order, get_order, get_orders, update_order_status,
            },
            review::{self, create_review, get_dish_reviews},
        },
        state::AppState,
    },
};

/// Documents the `Authorization: Token <key>` scheme.
struct TokenAuth;

impl Modify for TokenAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Format: 'Token <key>' or 'Bearer <key>'",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Menu API"),
    paths(
        auth::register,
        auth::login,
        auth::me,
        category::get_categories,
        category::create_category,
        category::delete_category,
        dish::get_dishes,
        dish::get_dish,
        dish::create_dish,
        dish::replace_dish,
        dish::patch_dish,
        dish::delete_dish,
        review::create_review,
        review::get_dish_reviews,
        order::get_orders,
        order::create_order,
        order::get_order,
        order::delete_order,
        order::update_order_status,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CurrentUserDto,
        RegisterDto,
        LoginDto,
        AuthResponseDto,
        CategoryDto,
        CreateCategoryDto,
        CategoryRefDto,
        DishTagDto,
        DishListItemDto,
        DishDetailDto,
        DishPayloadDto,
        PatchDishDto,
        ReviewDto,
        CreateReviewDto,
        OrderStatusDto,
        OrderItemDto,
        OrderDto,
        CreateOrderDto,
        CreateOrderItemDto,
        UpdateOrderStatusDto,
    )),
    modifiers(&TokenAuth),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "category", description = "Menu categories"),
        (name = "dish", description = "Menu dishes"),
        (name = "review", description = "Dish reviews"),
        (name = "order", description = "Orders and their status"),
    )
)]
pub struct ApiDoc;

/// Explicit route table for the whole API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register/", post(register))
        .route("/api/login/", post(login))
        .route("/api/me/", get(me))
        .route("/api/categories/", get(get_categories).post(create_category))
        .route("/api/categories/{id}/", delete(delete_category))
        .route("/api/dishes/", get(get_dishes).post(create_dish))
        .route(
            "/api/dishes/{id}/",
            get(get_dish)
                .put(replace_dish)
                .patch(patch_dish)
                .delete(delete_dish),
        )
        .route("/api/dishes/{id}/reviews/", get(get_dish_reviews))
        .route("/api/reviews/", post(create_review))
        .route("/api/orders/", get(get_orders).post(create_order))
        .route("/api/orders/{id}/", get(get_order).delete(delete_order))
        .route("/api/orders/{id}/status/", patch(update_order_status))
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
