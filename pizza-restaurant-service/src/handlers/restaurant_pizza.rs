use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::NewRestaurantPizza;
use crate::serializer::{serialize_restaurant_pizza_details, RestaurantPizzaDetails};
use crate::store;

use super::{with_connection, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price between 1 and 30 inclusive
    pub price: i64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Pizza offered by the restaurant", body = RestaurantPizzaDetails),
        (status = 400, description = "Invalid price or unknown restaurant/pizza", body = crate::error::ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<CreateRestaurantPizzaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaDetails>), ApiError> {
    let Json(payload) = payload?;
    let new_item = NewRestaurantPizza::new(payload.price, payload.restaurant_id, payload.pizza_id)?;

    let (item, restaurant, pizza) = with_connection(&state, move |conn| {
        store::create_restaurant_pizza(conn, new_item)
    })
    .await?;

    info!(
        restaurant_pizza_id = item.id,
        restaurant_id = item.restaurant_id,
        pizza_id = item.pizza_id,
        "Created restaurant pizza"
    );

    Ok((
        StatusCode::CREATED,
        Json(serialize_restaurant_pizza_details(&item, &restaurant, &pizza)),
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use diesel::prelude::*;
    use serde_json::{json, Value};

    use crate::handlers::test_support::{send, send_json, seeded_app};
    use crate::schema::restaurant_pizzas;

    fn validation_errors() -> Value {
        json!({ "errors": ["validation errors"] })
    }

    #[tokio::test]
    async fn test_create_restaurant_pizza() {
        let (app, _) = seeded_app();

        let (status, body) = send_json(
            &app,
            Method::POST,
            "/restaurant_pizzas",
            Some(json!({ "price": 5, "pizza_id": 1, "restaurant_id": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["price"], 5);
        assert_eq!(body["pizza_id"], 1);
        assert_eq!(body["restaurant_id"], 1);
        assert_eq!(
            body["pizza"],
            json!({ "id": 1, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" })
        );
        assert_eq!(
            body["restaurant"],
            json!({ "id": 1, "name": "Karen's Pizza Shack", "address": "address1" })
        );
    }

    #[tokio::test]
    async fn test_created_restaurant_pizza_shows_up_under_restaurant() {
        let (app, _) = seeded_app();

        let (status, created) = send_json(
            &app,
            Method::POST,
            "/restaurant_pizzas",
            Some(json!({ "price": 30, "pizza_id": 3, "restaurant_id": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, restaurant) = send_json(&app, Method::GET, "/restaurants/2", None).await;
        let items = restaurant["restaurant_pizzas"].as_array().unwrap();
        let listed = items.iter().find(|i| i["id"] == created["id"]).unwrap();
        assert_eq!(listed["price"], 30);
        assert_eq!(listed["pizza"]["name"], "Melanie");
    }

    #[tokio::test]
    async fn test_rejected_payloads_are_not_persisted() {
        let (app, pool) = seeded_app();
        let count = || -> i64 {
            restaurant_pizzas::table
                .count()
                .get_result(&mut pool.get().unwrap())
                .unwrap()
        };
        let before = count();

        let payloads = [
            json!({ "price": 35, "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": 0, "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": -3, "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": 5.5, "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": "5", "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": null, "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "pizza_id": 1, "restaurant_id": 1 }),
            json!({ "price": 5, "restaurant_id": 1 }),
            json!({ "price": 5, "pizza_id": 999, "restaurant_id": 1 }),
            json!({ "price": 5, "pizza_id": 1, "restaurant_id": 999 }),
        ];
        for payload in payloads {
            let (status, body) =
                send_json(&app, Method::POST, "/restaurant_pizzas", Some(payload.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
            assert_eq!(body, validation_errors());
        }

        assert_eq!(count(), before);
    }

    #[tokio::test]
    async fn test_every_price_in_range_is_accepted() {
        let (app, _) = seeded_app();

        for price in 1..=30 {
            let (status, body) = send_json(
                &app,
                Method::POST,
                "/restaurant_pizzas",
                Some(json!({ "price": price, "pizza_id": 2, "restaurant_id": 3 })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["price"], price);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_keeps_extractor_rejection() {
        let (app, _) = seeded_app();

        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/restaurant_pizzas")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"price\": 5,"))
            .unwrap();
        let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/restaurant_pizzas", None).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
