use crate::error::Result as DbErrorResult;

use lp_core::User;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct UserRepository;

impl UserRepository {
    /// Case-insensitive lookup through the stored `username_key`.
    pub async fn find_by_username<'e, E>(executor: E, username: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let username_key = User::username_key(username);

        let row = sqlx::query(
            r#"
                SELECT id, username, group_id
                FROM lp_users
                WHERE username_key = ?
                "#,
        )
        .bind(username_key)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, username, group_id
                FROM lp_users
                WHERE id = ?
                "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Inserts a user and returns it with the generated id. Fails with a
    /// unique violation if the username already exists in any casing.
    pub async fn create<'e, E>(executor: E, username: &str, group_id: i64) -> DbErrorResult<User>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let username_key = User::username_key(username);

        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO lp_users (username, username_key, group_id)
                VALUES (?, ?, ?)
                RETURNING id
                "#,
        )
        .bind(username)
        .bind(username_key)
        .bind(group_id)
        .fetch_one(executor)
        .await?;

        Ok(User {
            id,
            username: username.to_string(),
            group_id,
        })
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lp_users")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<User> {
        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            group_id: row.try_get("group_id")?,
        })
    }
}
