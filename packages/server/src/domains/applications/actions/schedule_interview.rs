//! Interview scheduling - creates the interview and moves the application
//! to Interviewing in one transaction.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use crate::common::{ApplicationId, DomainError, DomainResult, RequestContext};
use crate::domains::applications::actions::transition::transition_application;
use crate::domains::applications::machines::ApplicationStatus;
use crate::domains::applications::models::{Application, Interview};
use crate::domains::jobs::JobPosting;
use crate::domains::notifications::actions::notify_in_tx;
use crate::domains::notifications::models::NotificationKind;

/// Schedule an interview for an application.
///
/// Only the owning employer may schedule, only while the application is in a
/// pre-Interviewing state (the Applied/Viewed -> Interviewing edge), and
/// only for a future time. The application transition, the interview row
/// and the applicant notifications commit atomically.
pub async fn schedule_interview(
    ctx: &RequestContext,
    application_id: ApplicationId,
    scheduled_time: DateTime<Utc>,
    pool: &PgPool,
) -> DomainResult<Interview> {
    if scheduled_time <= Utc::now() {
        return Err(DomainError::Validation(
            "interview time must be in the future".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let application = Application::find_by_id_for_update(application_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("application"))?;

    let posting = JobPosting::find_in_tx(application.job_posting_id, &mut tx)
        .await?
        .ok_or(DomainError::NotFound("job posting"))?;

    // Validates terminal/actor/edge and notifies the applicant of the
    // status change.
    transition_application(
        ctx,
        &application,
        &posting,
        ApplicationStatus::Interviewing,
        None,
        &mut tx,
    )
    .await?;

    let interview = Interview::insert(application_id, scheduled_time, &mut tx).await?;

    notify_in_tx(
        application.user_id,
        NotificationKind::InterviewReminder,
        &format!(
            "Interview for \"{}\" scheduled at {} (meeting: {})",
            posting.title,
            interview.scheduled_time.to_rfc3339(),
            interview.meeting_ref
        ),
        Some(&format!("/interviews/{}", interview.id)),
        &mut tx,
    )
    .await?;

    tx.commit().await?;

    info!(
        interview_id = %interview.id,
        application_id = %application_id,
        employer = %ctx.actor,
        scheduled_time = %scheduled_time,
        "Interview scheduled"
    );

    Ok(interview)
}
