/// Shared test helpers for cross-crate use.
///
/// Centralizes database connection setup and unique-identifier generation
/// so the storage test suites do not duplicate them.
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Global counter so identifiers stay unique across parallel tests.
static GLOBAL_TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique test identifier in the form "{prefix}-{timestamp}-{counter}".
pub fn generate_unique_id(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    let counter = GLOBAL_TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, timestamp, counter)
}

/// Generate a unique lowercase slug, usable for catalog entities.
pub fn generate_unique_slug(prefix: &str) -> String {
    generate_unique_id(prefix).to_lowercase()
}

/// Get the test database URL from the environment, or default to in-memory SQLite.
pub fn get_test_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
}

/// Open a fresh in-memory SQLite database for a test.
///
/// Capped at a single pooled connection: every `sqlite::memory:` connection
/// is its own database, so a wider pool would scatter the tables.
pub async fn create_test_connection() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    Database::connect(options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_do_not_collide() {
        let a = generate_unique_id("TEST");
        let b = generate_unique_id("TEST");
        assert_ne!(a, b);
        assert!(a.starts_with("TEST-"));
    }

    #[test]
    fn slugs_are_lowercase() {
        let slug = generate_unique_slug("Book");
        assert_eq!(slug, slug.to_lowercase());
    }

    #[tokio::test]
    async fn in_memory_connection_opens() {
        let db = create_test_connection().await.unwrap();
        assert!(db.ping().await.is_ok());
    }
}
