#![cfg(test)]
use sea_orm::DatabaseConnection;

use crate::db::{pizza_service, restaurant_service};
use crate::domain::{NewPizza, NewRestaurant};

/// Every test gets its own migrated in-memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_in_memory().await
}

pub async fn seed_restaurant(db: &DatabaseConnection, name: &str, address: &str) -> Result<i32, anyhow::Error> {
    let input = NewRestaurant { name: Some(name.into()), address: Some(address.into()) };
    Ok(restaurant_service::create_restaurant(db, input).await?.id)
}

pub async fn seed_pizza(db: &DatabaseConnection, name: &str, ingredients: &str) -> Result<i32, anyhow::Error> {
    let input = NewPizza { name: Some(name.into()), ingredients: Some(ingredients.into()) };
    Ok(pizza_service::create_pizza(db, input).await?.id)
}
