mod auth_token;
mod category;
mod dish;
mod order;
mod review;
