use diesel::{insert_into, prelude::*, SqliteConnection};

use crate::error::StoreError;
use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

const RESTAURANTS: [(&str, &str); 3] = [
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: [(&str, &str); 3] = [
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

// (price, restaurant index, pizza index)
const MENU: [(i64, usize, usize); 4] = [(1, 0, 0), (10, 0, 1), (4, 1, 1), (5, 2, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub restaurants: usize,
    pub pizzas: usize,
    pub restaurant_pizzas: usize,
}

/// Replaces every row of the three tables with the sample data.
pub fn seed(conn: &mut SqliteConnection) -> Result<SeedSummary, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;

        let restaurant_ids = RESTAURANTS
            .iter()
            .map(|&(name, address)| {
                insert_into(restaurants::table)
                    .values(NewRestaurant { name, address })
                    .returning(restaurants::id)
                    .get_result::<i32>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pizza_ids = PIZZAS
            .iter()
            .map(|&(name, ingredients)| {
                insert_into(pizzas::table)
                    .values(NewPizza { name, ingredients })
                    .returning(pizzas::id)
                    .get_result::<i32>(conn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let menu = MENU
            .iter()
            .map(|&(price, r, p)| NewRestaurantPizza::new(price, restaurant_ids[r], pizza_ids[p]))
            .collect::<Result<Vec<_>, _>>()?;
        let restaurant_pizzas = insert_into(restaurant_pizzas::table)
            .values(&menu)
            .execute(conn)?;

        Ok(SeedSummary {
            restaurants: restaurant_ids.len(),
            pizzas: pizza_ids.len(),
            restaurant_pizzas,
        })
    })
}
