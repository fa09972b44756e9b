pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::{response::Html, routing::get, Router};
use diesel::SqliteConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::DbPool;
use crate::error::{ApiError, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Runs blocking diesel work on the blocking thread pool with a pooled
/// connection.
async fn with_connection<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let pool = state.pool.clone();
    tokio::task::spawn_blocking(move || -> Result<T, StoreError> {
        let mut conn = pool.get()?;
        f(&mut *conn)
    })
    .await
    .map_err(|e| ApiError::InternalError(format!("Blocking task failed: {e}")))?
    .map_err(ApiError::from)
}

/// Path ids outside the `i32` key range cannot name a stored row.
fn row_id(id: i64, resource: &'static str) -> Result<i32, ApiError> {
    i32::try_from(id).map_err(|_| ApiError::NotFound(resource))
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Pizza Restaurants API</h1>")
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        pizza::get_pizza,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::serializer::RestaurantSummary,
            crate::serializer::RestaurantDetails,
            crate::serializer::RestaurantPizzaWithPizza,
            crate::serializer::PizzaSummary,
            crate::serializer::PizzaDetails,
            crate::serializer::RestaurantPizzaWithRestaurant,
            crate::serializer::RestaurantPizzaDetails,
            restaurant_pizza::CreateRestaurantPizzaRequest,
            crate::error::ApiErrorResponse,
            crate::error::ValidationErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Pizza offers and prices per restaurant")
    ),
    info(
        title = "Pizza Restaurants API",
        description = "Restaurants, pizzas and the prices restaurants offer them at",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
