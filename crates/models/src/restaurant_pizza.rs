//! Priced association between a restaurant and a pizza.
//!
//! A row belongs to its restaurant and is removed with it; the pizza is only
//! referenced.
use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, pizza, restaurant};

pub const PRICE_MIN: i64 = 1;
pub const PRICE_MAX: i64 = 30;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Restaurant,
    Pizza,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Restaurant => Entity::belongs_to(restaurant::Entity)
                .from(Column::RestaurantId)
                .to(restaurant::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Pizza => Entity::belongs_to(pizza::Entity)
                .from(Column::PizzaId)
                .to(pizza::Column::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .into(),
        }
    }
}

impl Related<restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(price) = &self.price {
            validate_price(Some(i64::from(*price)))?;
        }
        Ok(self)
    }
}

/// Price must be present and within `PRICE_MIN..=PRICE_MAX`.
pub fn validate_price(price: Option<i64>) -> Result<i32, ModelError> {
    match price {
        Some(p) if (PRICE_MIN..=PRICE_MAX).contains(&p) => Ok(p as i32),
        _ => Err(ModelError::validation("Price must be between 1 and 30.")),
    }
}

/// Insert an association. Callers are responsible for checking that both
/// referenced rows exist.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    restaurant_id: i32,
    pizza_id: i32,
    price: i64,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        price: Set(validate_price(Some(price))?),
        restaurant_id: Set(restaurant_id),
        pizza_id: Set(pizza_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
