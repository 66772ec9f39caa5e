use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::{info, instrument, warn};

use models::views::PizzaSummary;
use models::{pizza, restaurant_pizza};

use crate::{domain::NewPizza, errors::ServiceError};

/// All pizzas, without associations.
#[instrument(skip(db))]
pub async fn list_pizzas(db: &DatabaseConnection) -> Result<Vec<PizzaSummary>, ServiceError> {
    let rows = pizza::Entity::find()
        .order_by_asc(pizza::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(PizzaSummary::from).collect())
}

#[instrument(skip(db, input))]
pub async fn create_pizza(db: &DatabaseConnection, input: NewPizza) -> Result<PizzaSummary, ServiceError> {
    let (name, ingredients) = input.require()?;
    let created = pizza::create(db, &name, &ingredients).await?;
    info!(id = created.id, name = %created.name, "created pizza");
    Ok(created.into())
}

/// Delete a pizza that no restaurant offers. Pizzas are not owned by their
/// associations, so a referenced pizza is left alone and `Conflict` returned.
#[instrument(skip(db))]
pub async fn delete_pizza(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if pizza::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("Pizza"));
    }
    let references = restaurant_pizza::Entity::find()
        .filter(restaurant_pizza::Column::PizzaId.eq(id))
        .count(&txn)
        .await?;
    if references > 0 {
        warn!(id, references, "refusing to delete pizza still offered by restaurants");
        return Err(ServiceError::Conflict(format!(
            "Pizza is still offered by {} restaurant pizza record(s)",
            references
        )));
    }
    pizza::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(id, "deleted pizza");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{restaurant_pizza_service::create_restaurant_pizza, restaurant_service::delete_restaurant};
    use crate::domain::NewRestaurantPizza;
    use crate::test_support::{get_db, seed_pizza, seed_restaurant};

    #[tokio::test]
    async fn list_returns_summaries() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_pizza(&db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
        seed_pizza(&db, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await?;

        let list = list_pizzas(&db).await?;
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].ingredients, "Dough, Tomato Sauce, Cheese, Pepperoni");
        Ok(())
    }

    #[tokio::test]
    async fn create_validates_both_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_pizza(&db, NewPizza { name: Some("Pie".into()), ingredients: Some("Dough".into()) })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Pizza name must be at least 4 characters long.");

        let err = create_pizza(&db, NewPizza { name: Some("Pizza".into()), ingredients: Some(" ab ".into()) })
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Ingredients must be at least 4 characters long.");

        let ok = create_pizza(&db, NewPizza { name: Some(" Melanie ".into()), ingredients: Some(" Dough ".into()) }).await?;
        assert_eq!(ok.name, "Melanie");
        assert_eq!(ok.ingredients, "Dough");
        Ok(())
    }

    #[tokio::test]
    async fn referenced_pizza_cannot_be_deleted_until_owner_goes() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let r = seed_restaurant(&db, "Kiki's Pizza", "address3").await?;
        let p = seed_pizza(&db, "Emma", "Dough, Tomato Sauce, Cheese").await?;
        create_restaurant_pizza(
            &db,
            NewRestaurantPizza { restaurant_id: Some(r), pizza_id: Some(p), price: Some(8.into()) },
        )
        .await?;

        let err = delete_pizza(&db, p).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(list_pizzas(&db).await?.len(), 1);

        delete_restaurant(&db, r).await?;
        delete_pizza(&db, p).await?;
        assert!(list_pizzas(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(delete_pizza(&db, 77).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
