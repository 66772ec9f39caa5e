//! Write inputs as they arrive from clients. Every field is optional so a
//! missing one can be reported as missing data rather than a parse failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPizza {
    pub name: Option<String>,
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRestaurantPizza {
    pub pizza_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    /// Kept as raw JSON so a sent price of the wrong type is rejected as a
    /// bad price rather than as a body that failed to parse.
    pub price: Option<Value>,
}

fn missing(fields: &[(&str, bool)]) -> Result<(), ServiceError> {
    let absent: Vec<&str> = fields.iter().filter(|(_, present)| !present).map(|(name, _)| *name).collect();
    if absent.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::MissingData(format!("Missing data: {}", absent.join(", "))))
    }
}

impl NewRestaurant {
    pub fn require(self) -> Result<(String, String), ServiceError> {
        missing(&[("name", self.name.is_some()), ("address", self.address.is_some())])?;
        Ok((self.name.unwrap_or_default(), self.address.unwrap_or_default()))
    }
}

impl NewPizza {
    pub fn require(self) -> Result<(String, String), ServiceError> {
        missing(&[("name", self.name.is_some()), ("ingredients", self.ingredients.is_some())])?;
        Ok((self.name.unwrap_or_default(), self.ingredients.unwrap_or_default()))
    }
}

impl NewRestaurantPizza {
    /// Returns `(restaurant_id, pizza_id, price)`. The price is `None` when
    /// it was sent but is not an integer; price validation rejects that.
    pub fn require(self) -> Result<(i32, i32, Option<i64>), ServiceError> {
        missing(&[
            ("pizza_id", self.pizza_id.is_some()),
            ("restaurant_id", self.restaurant_id.is_some()),
            ("price", self.price.is_some()),
        ])?;
        match (self.restaurant_id, self.pizza_id, self.price) {
            (Some(r), Some(p), Some(price)) => Ok((r, p, price.as_i64())),
            _ => Err(ServiceError::MissingData("Missing data".into())),
        }
    }
}
