//! Interview cancellation.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, InterviewId, RequestContext, RoleKind};
use crate::domains::applications::machines::{ApplicationStatus, InterviewStatus};
use crate::domains::applications::models::{Application, Interview};
use crate::domains::jobs::JobPosting;
use crate::domains::notifications::actions::notify_in_tx;
use crate::domains::notifications::models::NotificationKind;

/// Cancel a scheduled interview (owning employer only).
///
/// Part of the interview sub-workflow rather than the public application
/// edge table: if the application is still Interviewing it is returned to
/// Viewed so the employer can schedule again or decide later. An application
/// already withdrawn keeps its state.
pub async fn cancel_interview(
    ctx: &RequestContext,
    interview_id: InterviewId,
    pool: &PgPool,
) -> DomainResult<Interview> {
    let mut tx = pool.begin().await?;

    let interview = Interview::find_by_id_for_update(interview_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("interview"))?;

    let application = Application::find_by_id_for_update(interview.application_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("application"))?;

    let posting = JobPosting::find_in_tx(application.job_posting_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("job posting"))?;

    ctx.require(RoleKind::Employer)?;
    if posting.employer_id != ctx.actor {
        return Err(DomainError::denied(
            "only the employer who owns this posting may cancel the interview",
        ));
    }

    let status = interview
        .current_status()
        .map_err(|e| DomainError::Conflict(e.to_string()))?;
    if !status.allows(InterviewStatus::Cancelled) {
        return Err(DomainError::Conflict(format!(
            "interview is already {}",
            status
        )));
    }

    let cancelled = Interview::cancel(interview_id, &mut tx).await?;

    let app_status = application
        .current_status()
        .map_err(|e| DomainError::Conflict(e.to_string()))?;
    if app_status == ApplicationStatus::Interviewing {
        Application::update_status(application.id, ApplicationStatus::Viewed, None, &mut tx)
            .await?;
    }

    notify_in_tx(
        application.user_id,
        NotificationKind::InterviewReminder,
        &format!("Your interview for \"{}\" was cancelled", posting.title),
        Some(&format!("/applications/{}", application.id)),
        &mut tx,
    )
    .await?;

    tx.commit().await?;

    info!(
        interview_id = %interview_id,
        application_id = %application.id,
        "Interview cancelled"
    );

    Ok(cancelled)
}
