use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::common::{JobId, UserId};

/// JobPosting model - only what the application workflow needs: employer
/// ownership and the published gate that controls whether job seekers may
/// apply. Listing/search/editing live outside the core.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct JobPosting {
    pub id: JobId,
    pub employer_id: UserId,
    pub title: String,
    pub description: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub async fn find_by_id<'e>(
        id: JobId,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM job_postings WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch inside a workflow transaction. Postings are not mutated by the
    /// workflows, so no row lock is taken.
    pub async fn find_in_tx(
        id: JobId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Option<Self>> {
        Self::find_by_id(id, &mut **tx).await
    }

    pub async fn insert(&self, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO job_postings (id, employer_id, title, description, published)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(self.id)
        .bind(self.employer_id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.published)
        .fetch_one(pool)
        .await
    }

    pub async fn set_published(id: JobId, published: bool, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE job_postings SET published = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(published)
        .fetch_one(pool)
        .await
    }
}
