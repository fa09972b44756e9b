use pizza_restaurant_service::{
    database_url,
    db::{create_pool, run_migrations},
    error::StoreError,
    seed::{self, SeedSummary},
};
use tracing::info;

pub async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let database_url = database_url();
    let pool = create_pool(&database_url)?;
    run_migrations(&pool)?;

    let summary = tokio::task::spawn_blocking(move || -> Result<SeedSummary, StoreError> {
        let mut conn = pool.get()?;
        seed::seed(&mut conn)
    })
    .await??;

    info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "Seeded {}",
        database_url
    );
    Ok(())
}
