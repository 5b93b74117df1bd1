use lp_core::UserGroup;
use lp_db::UserGroupRepository;

use sqlx::SqlitePool;

/// Inserts a single group
pub async fn create_group(pool: &SqlitePool, name: &str, is_default: bool) -> UserGroup {
    UserGroupRepository::create(pool, name, is_default)
        .await
        .expect("Failed to create test group")
}

/// Inserts groups in order, so ids follow the slice order starting at 1
pub async fn create_groups(pool: &SqlitePool, groups: &[(&str, bool)]) -> Vec<UserGroup> {
    let mut created = Vec::with_capacity(groups.len());
    for (name, is_default) in groups {
        created.push(create_group(pool, name, *is_default).await);
    }
    created
}
