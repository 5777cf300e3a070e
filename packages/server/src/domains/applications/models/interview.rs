use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::{PgExecutor, Postgres, Transaction};

use crate::common::{ApplicationId, InterviewId};
use crate::domains::applications::machines::{InterviewResult, InterviewStatus};

/// Interview model - created by the owning employer against an application,
/// mutated once to Completed (with a result) or Cancelled.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Interview {
    pub id: InterviewId,
    pub application_id: ApplicationId,
    pub scheduled_time: DateTime<Utc>,
    pub meeting_ref: String,
    pub status: String,
    pub result: Option<String>,
    pub employer_notes: Option<String>,
    pub applicant_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Opaque meeting reference handed to both participants. The actual video
/// platform resolves it; the core only guarantees uniqueness-in-practice.
pub fn generate_meeting_ref() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    format!("meet-{}", token.to_lowercase())
}

impl Interview {
    pub fn current_status(&self) -> anyhow::Result<InterviewStatus> {
        self.status
            .parse()
            .map_err(|_| anyhow::anyhow!("interview {} has corrupt status", self.id))
    }

    pub async fn insert(
        application_id: ApplicationId,
        scheduled_time: DateTime<Utc>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO interviews (id, application_id, scheduled_time, meeting_ref, status)
             VALUES ($1, $2, $3, $4, 'scheduled')
             RETURNING *",
        )
        .bind(InterviewId::new())
        .bind(application_id)
        .bind(scheduled_time)
        .bind(generate_meeting_ref())
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn find_by_id<'e>(
        id: InterviewId,
        executor: impl PgExecutor<'e>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM interviews WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Row-locked fetch for evaluation/cancellation transactions.
    pub async fn find_by_id_for_update(
        id: InterviewId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM interviews WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Record the evaluation outcome. Caller has verified the Scheduled ->
    /// Completed edge under the row lock.
    pub async fn complete(
        id: InterviewId,
        result: InterviewResult,
        employer_notes: Option<&str>,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE interviews
             SET status = 'completed', result = $2, employer_notes = $3
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(result.as_str())
        .bind(employer_notes)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn cancel(id: InterviewId, tx: &mut Transaction<'_, Postgres>) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE interviews SET status = 'cancelled' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut **tx)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_refs_are_opaque_and_distinct() {
        let a = generate_meeting_ref();
        let b = generate_meeting_ref();
        assert!(a.starts_with("meet-"));
        assert_eq!(a.len(), "meet-".len() + 12);
        assert_ne!(a, b);
    }
}
