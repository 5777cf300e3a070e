//! Apply action - a job seeker submits an application to a posting.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::{DomainError, DomainResult, JobId, RequestContext, RoleKind};
use crate::domains::applications::models::Application;
use crate::domains::jobs::JobPosting;

/// Submit an application in the Applied state.
///
/// Rejected before any write when the posting is missing, unpublished, or
/// the actor lacks the job seeker capability. A second apply to the same
/// posting hits the (user, posting) unique key and surfaces as Conflict.
pub async fn apply(
    ctx: &RequestContext,
    job_posting_id: JobId,
    cv_id: Option<Uuid>,
    cover_letter: Option<&str>,
    pool: &PgPool,
) -> DomainResult<Application> {
    ctx.require(RoleKind::JobSeeker)?;

    let posting = JobPosting::find_by_id(job_posting_id, pool)
        .await?
        .ok_or(DomainError::NotFound("job posting"))?;

    if !posting.published {
        return Err(DomainError::Validation(
            "this job posting is not accepting applications".to_string(),
        ));
    }

    let application =
        Application::insert(ctx.actor, job_posting_id, cv_id, cover_letter, pool).await?;

    info!(
        application_id = %application.id,
        user_id = %ctx.actor,
        job_posting_id = %job_posting_id,
        "Application submitted"
    );

    Ok(application)
}
