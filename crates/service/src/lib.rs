//! Service layer providing the restaurant/pizza operations on top of models.
//! - Every function takes the storage handle explicitly.
//! - Reuses validation, entities and views from the `models` crate.
//! - Reports failures through the `ServiceError` taxonomy.

pub mod errors;
pub mod domain;
pub mod db;
#[cfg(test)]
pub mod test_support;
