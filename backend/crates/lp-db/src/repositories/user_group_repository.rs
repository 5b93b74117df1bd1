use crate::error::Result as DbErrorResult;

use lp_core::UserGroup;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct UserGroupRepository;

impl UserGroupRepository {
    pub async fn create<'e, E>(executor: E, name: &str, is_default: bool) -> DbErrorResult<UserGroup>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO lp_user_groups (name, is_default)
                VALUES (?, ?)
                RETURNING id
                "#,
        )
        .bind(name)
        .bind(is_default)
        .fetch_one(executor)
        .await?;

        Ok(UserGroup {
            id,
            name: name.to_string(),
            is_default,
        })
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<UserGroup>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, is_default
                FROM lp_user_groups
                WHERE id = ?
                "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<UserGroup>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, name, is_default
                FROM lp_user_groups
                ORDER BY id
                "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    /// Group a newly provisioned user is assigned to: the lowest-id group
    /// flagged default, else the lowest-id group of all. `None` when no
    /// groups exist.
    pub async fn find_provisioning_group<'e, E>(executor: E) -> DbErrorResult<Option<UserGroup>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, is_default
                FROM lp_user_groups
                ORDER BY is_default DESC, id ASC
                LIMIT 1
                "#,
        )
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<UserGroup> {
        Ok(UserGroup {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            is_default: row.try_get("is_default")?,
        })
    }
}
