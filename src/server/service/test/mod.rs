mod auth;
mod category;
mod dish;
mod order;
mod review;
