use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

use crate::common::UserId;

/// User model - identity plus the single active role context.
///
/// Authentication happens upstream; the core only stores which role the
/// session currently acts as.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub active_role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub async fn find_by_id(id: UserId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(&self, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (id, username, email, active_role)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.username)
        .bind(&self.email)
        .bind(&self.active_role)
        .fetch_one(pool)
        .await
    }

    /// Set (or clear) the active role context.
    pub async fn set_active_role<'e>(
        id: UserId,
        role: Option<&str>,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>("UPDATE users SET active_role = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(role)
            .fetch_one(executor)
            .await
    }
}
