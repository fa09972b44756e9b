use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::serializer::{
    serialize_restaurant_details, serialize_restaurant_summary, RestaurantDetails,
    RestaurantSummary,
};
use crate::store;

use super::{row_id, with_connection, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = [RestaurantSummary]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = with_connection(&state, store::list_restaurants).await?;

    Ok(Json(
        restaurants.iter().map(serialize_restaurant_summary).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with the pizzas it offers", body = RestaurantDetails),
        (status = 404, description = "Restaurant not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RestaurantDetails>, ApiError> {
    let id = row_id(id, "Restaurant")?;
    let (restaurant, menu) = with_connection(&state, move |conn| {
        store::find_restaurant_with_menu(conn, id)
    })
    .await?
    .ok_or(ApiError::NotFound("Restaurant"))?;

    Ok(Json(serialize_restaurant_details(&restaurant, &menu)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its pizza offers deleted"),
        (status = 404, description = "Restaurant not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let id = row_id(id, "Restaurant")?;
    let deleted =
        with_connection(&state, move |conn| store::delete_restaurant(conn, id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("Restaurant"));
    }

    info!(restaurant_id = id, "Deleted restaurant");
    Ok(StatusCode::NO_CONTENT)
}
