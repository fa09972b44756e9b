use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::serializer::{
    serialize_pizza_details, serialize_pizza_summary, PizzaDetails, PizzaSummary,
};
use crate::store;

use super::{row_id, with_connection, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pizzas", get(list_pizzas))
        .route("/pizzas/{id}", get(get_pizza))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaSummary]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let pizzas = with_connection(&state, store::list_pizzas).await?;

    Ok(Json(pizzas.iter().map(serialize_pizza_summary).collect()))
}

#[utoipa::path(
    get,
    path = "/pizzas/{id}",
    responses(
        (status = 200, description = "Pizza with the restaurants offering it", body = PizzaDetails),
        (status = 404, description = "Pizza not found", body = crate::error::ApiErrorResponse),
    ),
    params(
        ("id" = i64, Path, description = "Pizza ID")
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PizzaDetails>, ApiError> {
    let id = row_id(id, "Pizza")?;
    let (pizza, offers) =
        with_connection(&state, move |conn| store::find_pizza_with_offers(conn, id))
            .await?
            .ok_or(ApiError::NotFound("Pizza"))?;

    Ok(Json(serialize_pizza_details(&pizza, &offers)))
}
