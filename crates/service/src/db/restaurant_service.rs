use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::{info, instrument};

use models::views::{RestaurantDetail, RestaurantSummary};
use models::{pizza, restaurant, restaurant_pizza};

use crate::{domain::NewRestaurant, errors::ServiceError};

/// All restaurants, without their associations.
#[instrument(skip(db))]
pub async fn list_restaurants(db: &DatabaseConnection) -> Result<Vec<RestaurantSummary>, ServiceError> {
    let rows = restaurant::Entity::find()
        .order_by_asc(restaurant::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(RestaurantSummary::from).collect())
}

/// One restaurant with its associations and their pizzas.
#[instrument(skip(db))]
pub async fn get_restaurant(db: &DatabaseConnection, id: i32) -> Result<RestaurantDetail, ServiceError> {
    let found = restaurant::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Restaurant"))?;

    let rows = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::RestaurantId.eq(id))
        .order_by_asc(restaurant_pizza::Column::Id)
        .find_also_related(pizza::Entity)
        .all(db)
        .await?;
    // The pizza FK is NOT NULL and restricted, so every row has its pizza.
    let entries = rows.into_iter().filter_map(|(rp, p)| p.map(|p| (rp, p)));
    Ok(RestaurantDetail::new(found, entries))
}

#[instrument(skip(db, input))]
pub async fn create_restaurant(db: &DatabaseConnection, input: NewRestaurant) -> Result<RestaurantSummary, ServiceError> {
    let (name, address) = input.require()?;
    let created = restaurant::create(db, &name, &address).await?;
    info!(id = created.id, name = %created.name, "created restaurant");
    Ok(created.into())
}

/// Delete a restaurant and every association it owns in one transaction.
#[instrument(skip(db))]
pub async fn delete_restaurant(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if restaurant::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("Restaurant"));
    }
    let removed = restaurant_pizza::Entity::delete_many()
        .filter(restaurant_pizza::Column::RestaurantId.eq(id))
        .exec(&txn)
        .await?
        .rows_affected;
    restaurant::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(id, associations_removed = removed, "deleted restaurant");
    Ok(())
}
