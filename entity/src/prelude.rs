pub use super::auth_token::Entity as AuthToken;
pub use super::category::Entity as Category;
pub use super::dish::Entity as Dish;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
