//! Response projections of the entities.
//!
//! Each view names the relationship edges it expands and stops there: a
//! restaurant expands its associations, an association expands its pizza,
//! and a pizza expands nothing. None of the nested types can point back at
//! an entity already on the path, so serialization never cycles.

use serde::{Deserialize, Serialize};

use crate::{pizza, restaurant, restaurant_pizza};

/// Restaurant without relationships (list context).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<&restaurant::Model> for RestaurantSummary {
    fn from(m: &restaurant::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), address: m.address.clone() }
    }
}

impl From<restaurant::Model> for RestaurantSummary {
    fn from(m: restaurant::Model) -> Self {
        Self { id: m.id, name: m.name, address: m.address }
    }
}

/// Pizza without relationships; used everywhere a pizza is nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<&pizza::Model> for PizzaSummary {
    fn from(m: &pizza::Model) -> Self {
        Self { id: m.id, name: m.name.clone(), ingredients: m.ingredients.clone() }
    }
}

impl From<pizza::Model> for PizzaSummary {
    fn from(m: pizza::Model) -> Self {
        Self { id: m.id, name: m.name, ingredients: m.ingredients }
    }
}

/// Association as seen from its owning restaurant: the restaurant
/// back-reference is dropped and only the pizza is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizzaEntry {
    pub id: i32,
    pub price: i32,
    pub pizza: PizzaSummary,
}

/// Restaurant with its associations expanded one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaEntry>,
}

impl RestaurantDetail {
    /// Build from the restaurant row and its association rows paired with
    /// their pizzas. Entries keep the order they are given in.
    pub fn new(
        restaurant: restaurant::Model,
        entries: impl IntoIterator<Item = (restaurant_pizza::Model, pizza::Model)>,
    ) -> Self {
        let restaurant_pizzas = entries
            .into_iter()
            .map(|(rp, p)| RestaurantPizzaEntry { id: rp.id, price: rp.price, pizza: p.into() })
            .collect();
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas,
        }
    }
}

/// Response for a freshly created association. Raw foreign keys are kept
/// next to summaries of both ends; neither summary carries associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPizzaCreated {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaCreated {
    pub fn new(rp: restaurant_pizza::Model, restaurant: &restaurant::Model, pizza: &pizza::Model) -> Self {
        Self {
            id: rp.id,
            price: rp.price,
            restaurant_id: rp.restaurant_id,
            pizza_id: rp.pizza_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}
