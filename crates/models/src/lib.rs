//! Entities of the pizza restaurant domain, the validators guarding their
//! fields, and the view projections used to serialize them.

pub mod errors;
pub mod db;
pub mod validation;
pub mod restaurant;
pub mod pizza;
pub mod restaurant_pizza;
pub mod views;

#[cfg(test)]
mod tests;
