//! JSON output shapes.
//!
//! Each nesting context gets its own struct, so a restaurant pizza listed
//! under its restaurant carries the pizza but never the restaurant again, and
//! the other way round under a pizza.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    /// Comma separated, free text
    pub ingredients: String,
}

/// A restaurant pizza as listed under its restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaWithPizza {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

/// A restaurant pizza as listed under its pizza.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaWithRestaurant {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub restaurant: RestaurantSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantDetails {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PizzaDetails {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithRestaurant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaDetails {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

pub fn serialize_restaurant_summary(restaurant: &models::Restaurant) -> RestaurantSummary {
    RestaurantSummary {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
    }
}

pub fn serialize_pizza_summary(pizza: &models::Pizza) -> PizzaSummary {
    PizzaSummary {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
    }
}

pub fn serialize_restaurant_details(
    restaurant: &models::Restaurant,
    menu: &[(models::RestaurantPizza, models::Pizza)],
) -> RestaurantDetails {
    RestaurantDetails {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        restaurant_pizzas: menu
            .iter()
            .map(|(item, pizza)| RestaurantPizzaWithPizza {
                id: item.id,
                price: item.price,
                pizza_id: item.pizza_id,
                restaurant_id: item.restaurant_id,
                pizza: serialize_pizza_summary(pizza),
            })
            .collect(),
    }
}

pub fn serialize_pizza_details(
    pizza: &models::Pizza,
    offers: &[(models::RestaurantPizza, models::Restaurant)],
) -> PizzaDetails {
    PizzaDetails {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
        restaurant_pizzas: offers
            .iter()
            .map(|(item, restaurant)| RestaurantPizzaWithRestaurant {
                id: item.id,
                price: item.price,
                pizza_id: item.pizza_id,
                restaurant_id: item.restaurant_id,
                restaurant: serialize_restaurant_summary(restaurant),
            })
            .collect(),
    }
}

pub fn serialize_restaurant_pizza_details(
    item: &models::RestaurantPizza,
    restaurant: &models::Restaurant,
    pizza: &models::Pizza,
) -> RestaurantPizzaDetails {
    RestaurantPizzaDetails {
        id: item.id,
        price: item.price,
        pizza_id: item.pizza_id,
        restaurant_id: item.restaurant_id,
        pizza: serialize_pizza_summary(pizza),
        restaurant: serialize_restaurant_summary(restaurant),
    }
}
