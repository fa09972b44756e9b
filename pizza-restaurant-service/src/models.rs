use diesel::prelude::*;

use crate::error::ValidationError;
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

/// Lowest accepted price of a pizza on a restaurant's menu.
pub const MIN_PRICE: i64 = 1;
/// Highest accepted price of a pizza on a restaurant's menu.
pub const MAX_PRICE: i64 = 30;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = pizzas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = pizzas)]
pub struct NewPizza<'a> {
    pub name: &'a str,
    pub ingredients: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(belongs_to(Pizza))]
#[diesel(table_name = restaurant_pizzas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

/// A validated, not yet persisted, pairing of a restaurant and a pizza.
///
/// The only way to obtain one is [`NewRestaurantPizza::new`], so every value
/// that reaches an `INSERT` already carries a price in
/// `MIN_PRICE..=MAX_PRICE`.
#[derive(Insertable, Debug, Clone, Copy, PartialEq)]
#[diesel(table_name = restaurant_pizzas)]
pub struct NewRestaurantPizza {
    price: i32,
    restaurant_id: i32,
    pizza_id: i32,
}

impl NewRestaurantPizza {
    pub fn new(price: i64, restaurant_id: i32, pizza_id: i32) -> Result<Self, ValidationError> {
        if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
            return Err(ValidationError::PriceOutOfRange(price));
        }

        Ok(Self {
            // Range-checked above, always fits.
            price: price as i32,
            restaurant_id,
            pizza_id,
        })
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn restaurant_id(&self) -> i32 {
        self.restaurant_id
    }

    pub fn pizza_id(&self) -> i32 {
        self.pizza_id
    }
}
