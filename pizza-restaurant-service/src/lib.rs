use dotenvy::dotenv;
use std::env;

pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod seed;
pub mod serializer;
pub mod store;

pub const DEFAULT_DATABASE_URL: &str = "app.db";

/// `DATABASE_URL`, then the legacy `DB_URI`, then `app.db`.
pub fn database_url() -> String {
    dotenv().ok();

    resolve_database_url(env::var("DATABASE_URL").ok(), env::var("DB_URI").ok())
}

fn resolve_database_url(database_url: Option<String>, db_uri: Option<String>) -> String {
    database_url
        .or(db_uri)
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_prefers_database_url() {
        let url = resolve_database_url(Some("a.db".to_string()), Some("b.db".to_string()));
        assert_eq!(url, "a.db");
    }

    #[test]
    fn test_database_url_falls_back_to_db_uri() {
        assert_eq!(resolve_database_url(None, Some("b.db".to_string())), "b.db");
        assert_eq!(resolve_database_url(None, None), DEFAULT_DATABASE_URL);
    }
}
