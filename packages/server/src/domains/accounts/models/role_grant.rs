use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::common::{GrantId, RoleKind, UserId};

/// RoleGrant model - one row per (user, role), never hard-deleted.
///
/// An unapproved grant is a pending request; approval mutates the row in
/// place and records who approved it and when.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct RoleGrant {
    pub id: GrantId,
    pub user_id: UserId,
    pub role_kind: String,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl RoleGrant {
    /// Idempotent upsert: insert a grant if none exists for (user, role),
    /// otherwise return the existing row unchanged.
    pub async fn upsert_request(
        user_id: UserId,
        kind: RoleKind,
        approved: bool,
        pool: &PgPool,
    ) -> sqlx::Result<Self> {
        let inserted = sqlx::query_as::<_, Self>(
            "INSERT INTO role_grants (id, user_id, role_kind, approved, approved_at)
             VALUES ($1, $2, $3, $4, CASE WHEN $4 THEN now() END)
             ON CONFLICT (user_id, role_kind) DO NOTHING
             RETURNING *",
        )
        .bind(GrantId::new())
        .bind(user_id)
        .bind(kind.as_str())
        .bind(approved)
        .fetch_optional(pool)
        .await?;

        match inserted {
            Some(grant) => Ok(grant),
            // Lost the race or the grant already existed; either way the
            // existing record wins.
            None => Self::find_for_user(user_id, kind, pool)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    pub async fn find_by_id(id: GrantId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM role_grants WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Row-locked fetch for use inside an approval transaction.
    pub async fn find_by_id_for_update(
        id: GrantId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM role_grants WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub async fn find_for_user<'e>(
        user_id: UserId,
        kind: RoleKind,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM role_grants WHERE user_id = $1 AND role_kind = $2",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(executor)
        .await
    }

    /// Mark the grant approved. Caller has already verified it is pending.
    pub async fn approve(
        id: GrantId,
        admin: UserId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE role_grants
             SET approved = TRUE, approved_at = now(), approved_by = $2
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(admin)
        .fetch_one(&mut **tx)
        .await
    }

    /// Role kinds with an approved grant for this user.
    pub async fn approved_kinds(user_id: UserId, pool: &PgPool) -> sqlx::Result<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT role_kind FROM role_grants WHERE user_id = $1 AND approved = TRUE",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(kind,)| kind).collect())
    }
}
