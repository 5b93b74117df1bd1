use lp_db::ConnectionManager;

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Creates a file-backed pool with several connections, for tests that need
/// real cross-connection locking
pub async fn create_file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    ConnectionManager::new(dir.join("users.db"))
        .with_max_connections(max_connections)
        .with_busy_timeout(Duration::from_secs(30))
        .connect()
        .await
        .expect("Failed to create file pool")
}
