use diesel::{
    insert_into,
    prelude::*,
    result::{DatabaseErrorKind, Error::DatabaseError},
    SqliteConnection,
};

use crate::error::{StoreError, ValidationError};
use crate::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

pub type RestaurantMenu = Vec<(RestaurantPizza, Pizza)>;
pub type PizzaOffers = Vec<(RestaurantPizza, Restaurant)>;

pub fn list_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>, StoreError> {
    let results = restaurants::table
        .order(restaurants::id.asc())
        .select(Restaurant::as_select())
        .load(conn)?;
    Ok(results)
}

pub fn find_restaurant_with_menu(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<Option<(Restaurant, RestaurantMenu)>, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let Some(restaurant) = restaurants::table
            .find(restaurant_id)
            .select(Restaurant::as_select())
            .first(conn)
            .optional()?
        else {
            return Ok(None);
        };

        let menu = RestaurantPizza::belonging_to(&restaurant)
            .inner_join(pizzas::table)
            .order(restaurant_pizzas::id.asc())
            .select((RestaurantPizza::as_select(), Pizza::as_select()))
            .load(conn)?;

        Ok(Some((restaurant, menu)))
    })
}

/// Returns `false` when no such restaurant exists. Its restaurant pizzas go
/// with it through the `ON DELETE CASCADE` foreign key.
pub fn delete_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
) -> Result<bool, StoreError> {
    let deleted = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(restaurants::table.find(restaurant_id)).execute(conn)
    })?;
    Ok(deleted > 0)
}

pub fn list_pizzas(conn: &mut SqliteConnection) -> Result<Vec<Pizza>, StoreError> {
    let results = pizzas::table
        .order(pizzas::id.asc())
        .select(Pizza::as_select())
        .load(conn)?;
    Ok(results)
}

pub fn find_pizza_with_offers(
    conn: &mut SqliteConnection,
    pizza_id: i32,
) -> Result<Option<(Pizza, PizzaOffers)>, StoreError> {
    conn.transaction::<_, StoreError, _>(|conn| {
        let Some(pizza) = pizzas::table
            .find(pizza_id)
            .select(Pizza::as_select())
            .first(conn)
            .optional()?
        else {
            return Ok(None);
        };

        let offers = RestaurantPizza::belonging_to(&pizza)
            .inner_join(restaurants::table)
            .order(restaurant_pizzas::id.asc())
            .select((RestaurantPizza::as_select(), Restaurant::as_select()))
            .load(conn)?;

        Ok(Some((pizza, offers)))
    })
}

pub fn create_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_item: NewRestaurantPizza,
) -> Result<(RestaurantPizza, Restaurant, Pizza), StoreError> {
    conn.immediate_transaction::<_, StoreError, _>(|conn| {
        let restaurant = restaurants::table
            .find(new_item.restaurant_id())
            .select(Restaurant::as_select())
            .first(conn)
            .optional()?
            .ok_or(ValidationError::UnknownRestaurant(new_item.restaurant_id()))?;
        let pizza = pizzas::table
            .find(new_item.pizza_id())
            .select(Pizza::as_select())
            .first(conn)
            .optional()?
            .ok_or(ValidationError::UnknownPizza(new_item.pizza_id()))?;

        let item = insert_into(restaurant_pizzas::table)
            .values(&new_item)
            .returning(RestaurantPizza::as_returning())
            .get_result(conn)
            .map_err(constraint_violation)?;

        Ok((item, restaurant, pizza))
    })
}

fn constraint_violation(err: diesel::result::Error) -> StoreError {
    match err {
        DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation,
            info,
        ) => ValidationError::Constraint(info.message().to_string()).into(),
        e => e.into(),
    }
}
