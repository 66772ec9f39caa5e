use serde_json::{json, Value};

use crate::views::{PizzaSummary, RestaurantDetail, RestaurantPizzaCreated, RestaurantSummary};
use crate::{pizza, restaurant, restaurant_pizza};

fn restaurant_row() -> restaurant::Model {
    restaurant::Model { id: 1, name: "Karen's Pizza Shack".into(), address: "address1".into() }
}

fn pizza_row(id: i32, name: &str) -> pizza::Model {
    pizza::Model { id, name: name.into(), ingredients: "Dough, Tomato Sauce, Cheese".into() }
}

fn association(id: i32, price: i32, pizza_id: i32) -> restaurant_pizza::Model {
    restaurant_pizza::Model { id, price, restaurant_id: 1, pizza_id }
}

#[test]
fn summary_has_only_scalar_fields() {
    let v = serde_json::to_value(RestaurantSummary::from(restaurant_row())).unwrap();
    assert_eq!(v, json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"}));

    let v = serde_json::to_value(PizzaSummary::from(pizza_row(2, "Emma"))).unwrap();
    assert_eq!(v, json!({"id": 2, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}));
}

#[test]
fn detail_expands_pizza_without_back_references() {
    let detail = RestaurantDetail::new(
        restaurant_row(),
        vec![(association(10, 5, 2), pizza_row(2, "Emma")), (association(11, 9, 3), pizza_row(3, "Geri"))],
    );
    let v = serde_json::to_value(&detail).unwrap();

    let entries = v["restaurant_pizzas"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], json!({
        "id": 10,
        "price": 5,
        "pizza": {"id": 2, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}
    }));
    for entry in entries {
        assert!(entry.get("restaurant").is_none());
        assert!(entry.get("restaurant_id").is_none());
        let pizza = entry["pizza"].as_object().unwrap();
        assert!(!pizza.contains_key("restaurant_pizzas"));
    }
}

#[test]
fn detail_with_no_associations_serializes_empty_list() {
    let v = serde_json::to_value(RestaurantDetail::new(restaurant_row(), Vec::new())).unwrap();
    assert_eq!(v["restaurant_pizzas"], Value::Array(vec![]));
}

#[test]
fn created_view_keeps_keys_and_flat_summaries() {
    let r = restaurant_row();
    let p = pizza_row(2, "Emma");
    let v = serde_json::to_value(RestaurantPizzaCreated::new(association(7, 15, 2), &r, &p)).unwrap();

    assert_eq!(v["id"], 7);
    assert_eq!(v["price"], 15);
    assert_eq!(v["restaurant_id"], 1);
    assert_eq!(v["pizza_id"], 2);
    assert!(v["pizza"].get("restaurant_pizzas").is_none());
    assert!(v["restaurant"].get("restaurant_pizzas").is_none());
    assert_eq!(v["restaurant"]["name"], "Karen's Pizza Shack");
}
