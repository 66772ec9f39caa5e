pub mod restaurant_service;
pub mod pizza_service;
pub mod restaurant_pizza_service;
