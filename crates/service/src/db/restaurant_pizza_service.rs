use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{info, instrument};

use models::views::RestaurantPizzaCreated;
use models::{pizza, restaurant, restaurant_pizza};

use crate::{domain::NewRestaurantPizza, errors::ServiceError};

/// Offer a pizza at a restaurant for a price.
///
/// Checks run in order and stop at the first failure: all three fields
/// present, price in range, then both referenced rows exist. Nothing is
/// written unless every check passes.
#[instrument(skip(db))]
pub async fn create_restaurant_pizza(
    db: &DatabaseConnection,
    input: NewRestaurantPizza,
) -> Result<RestaurantPizzaCreated, ServiceError> {
    let (restaurant_id, pizza_id, price) = input.require()?;
    let price = restaurant_pizza::validate_price(price)?;

    let txn = db.begin().await?;
    let found_pizza = pizza::Entity::find_by_id(pizza_id).one(&txn).await?;
    let found_restaurant = restaurant::Entity::find_by_id(restaurant_id).one(&txn).await?;
    let (Some(found_pizza), Some(found_restaurant)) = (found_pizza, found_restaurant) else {
        return Err(ServiceError::ReferenceNotFound("Pizza or Restaurant not found".into()));
    };

    let created = restaurant_pizza::create(&txn, found_restaurant.id, found_pizza.id, price.into()).await?;
    txn.commit().await?;
    info!(id = created.id, restaurant_id, pizza_id, price, "created restaurant pizza");
    Ok(RestaurantPizzaCreated::new(created, &found_restaurant, &found_pizza))
}
