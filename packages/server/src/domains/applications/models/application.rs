use anyhow::Context;
use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Postgres, Transaction};
use uuid::Uuid;

use crate::common::{ApplicationId, JobId, UserId};
use crate::domains::applications::machines::ApplicationStatus;

/// Application model - one row per (user, job posting).
///
/// `status` holds the state-machine string; `result` is set only when the
/// application reaches Offered or Rejected.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Application {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub job_posting_id: JobId,
    pub cv_id: Option<Uuid>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub result: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    /// Parsed state-machine status.
    pub fn current_status(&self) -> anyhow::Result<ApplicationStatus> {
        self.status
            .parse()
            .with_context(|| format!("application {} has corrupt status", self.id))
    }

    /// Insert a new application in the Applied state. The (user, posting)
    /// unique key turns a duplicate apply into a database conflict.
    pub async fn insert<'e>(
        user_id: UserId,
        job_posting_id: JobId,
        cv_id: Option<Uuid>,
        cover_letter: Option<&str>,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO applications (id, user_id, job_posting_id, cv_id, cover_letter, status)
             VALUES ($1, $2, $3, $4, $5, 'applied')
             RETURNING *",
        )
        .bind(ApplicationId::new())
        .bind(user_id)
        .bind(job_posting_id)
        .bind(cv_id)
        .bind(cover_letter)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e>(
        id: ApplicationId,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Row-locked fetch. Concurrent conflicting transitions on the same
    /// application serialize here; the loser re-reads post-commit state.
    pub async fn find_by_id_for_update(
        id: ApplicationId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM applications WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Write the new status (and result for terminal evaluation outcomes).
    /// Callers have already validated the edge under the row lock.
    pub async fn update_status(
        id: ApplicationId,
        status: ApplicationStatus,
        result: Option<&str>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE applications SET status = $2, result = COALESCE($3, result)
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(result)
        .fetch_one(&mut **tx)
        .await
    }
}
