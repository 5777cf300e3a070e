//! Interview evaluation - completes the interview and propagates the result
//! into the owning application in one transaction.

use sqlx::PgPool;
use tracing::info;

use crate::common::{DomainError, DomainResult, InterviewId, RequestContext, RoleKind};
use crate::domains::applications::actions::transition::transition_application;
use crate::domains::applications::machines::{InterviewResult, InterviewStatus};
use crate::domains::applications::models::{Application, Interview};
use crate::domains::jobs::JobPosting;

/// Evaluate a scheduled interview.
///
/// Sets the interview to Completed with the result and employer notes, and
/// drives the application along Interviewing -> Offered/Rejected inside the
/// same transaction: there is no reachable state where only one of the two
/// records reflects the outcome. A second evaluation returns Conflict.
pub async fn evaluate_interview(
    ctx: &RequestContext,
    interview_id: InterviewId,
    result: InterviewResult,
    notes: Option<&str>,
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

    // Ownership gate before any state check, so a non-owning employer gets
    // PermissionDenied even on an already-completed interview.
    ctx.require(RoleKind::Employer)?;
    if posting.employer_id != ctx.actor {
        return Err(DomainError::denied(
            "only the employer who owns this posting may evaluate the interview",
        ));
    }

    let status = interview
        .current_status()
        .map_err(|e| DomainError::Conflict(e.to_string()))?;
    if !status.allows(InterviewStatus::Completed) {
        return Err(DomainError::Conflict(format!(
            "interview is already {}",
            status
        )));
    }

    let completed = Interview::complete(interview_id, result, notes, &mut tx).await?;

    transition_application(
        ctx,
        &application,
        &posting,
        result.application_outcome(),
        Some(result.as_str()),
        &mut tx,
    )
    .await?;

    tx.commit().await?;

    info!(
        interview_id = %interview_id,
        application_id = %application.id,
        result = %result,
        "Interview evaluated"
    );

    Ok(completed)
}
