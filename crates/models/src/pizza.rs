use sea_orm::{entity::prelude::*, ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, restaurant_pizza, validation};

pub const NAME_MIN_LEN: usize = 4;
pub const INGREDIENTS_MIN_LEN: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    RestaurantPizzas,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::RestaurantPizzas => Entity::has_many(restaurant_pizza::Entity).into(),
        }
    }
}

impl Related<restaurant_pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantPizzas.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(validate_name(name)?);
        }
        if let ActiveValue::Set(ingredients) = &self.ingredients {
            self.ingredients = Set(validate_ingredients(ingredients)?);
        }
        Ok(self)
    }
}

pub fn validate_name(name: &str) -> Result<String, ModelError> {
    validation::trimmed_min_len(name, NAME_MIN_LEN, "Pizza name must be at least 4 characters long.")
}

pub fn validate_ingredients(ingredients: &str) -> Result<String, ModelError> {
    validation::trimmed_min_len(ingredients, INGREDIENTS_MIN_LEN, "Ingredients must be at least 4 characters long.")
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, ingredients: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(validate_name(name)?),
        ingredients: Set(validate_ingredients(ingredients)?),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
