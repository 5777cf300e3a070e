//! Direct application status updates (employer opens detail -> Viewed,
//! applicant withdraws, employer decides from Interviewing).

use sqlx::PgPool;

use crate::common::{ApplicationId, DomainError, DomainResult, RequestContext};
use crate::domains::applications::actions::transition::transition_application;
use crate::domains::applications::machines::ApplicationStatus;
use crate::domains::applications::models::Application;
use crate::domains::jobs::JobPosting;

/// Drive the application along one edge of the state machine.
///
/// The legality check re-reads current state under a row lock inside the
/// same transaction as the write, so concurrent conflicting transitions
/// (simultaneous Withdraw and Offered) cannot both succeed.
pub async fn update_application_status(
    ctx: &RequestContext,
    application_id: ApplicationId,
    new_status: ApplicationStatus,
    pool: &PgPool,
) -> DomainResult<Application> {
    let mut tx = pool.begin().await?;

    let application = Application::find_by_id_for_update(application_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("application"))?;

    let posting = JobPosting::find_in_tx(application.job_posting_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("job posting"))?;

    let updated =
        transition_application(ctx, &application, &posting, new_status, None, &mut tx).await?;

    tx.commit().await?;

    Ok(updated)
}

/// Applicant-only withdrawal, from any non-terminal state.
pub async fn withdraw(
    ctx: &RequestContext,
    application_id: ApplicationId,
    pool: &PgPool,
) -> DomainResult<Application> {
    update_application_status(ctx, application_id, ApplicationStatus::Withdrawn, pool).await
}
