//! The single application transition function.
//!
//! Every status change funnels through `transition_application`, so edge
//! validation, actor gating and the StatusUpdate notification exist exactly
//! once. Callers hold the row lock on the application (`FOR UPDATE`) and run
//! inside the workflow transaction; a failed check aborts the whole
//! transaction, so no partial writes are ever visible.
//!
//! Check order: terminal state first (Conflict), then actor relationship
//! (PermissionDenied), then the edge table (Conflict).

use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::common::{DomainError, DomainResult, RequestContext, RoleKind};
use crate::domains::applications::machines::{ApplicationStatus, RequiredActor};
use crate::domains::applications::models::Application;
use crate::domains::jobs::JobPosting;
use crate::domains::notifications::actions::notify_in_tx;
use crate::domains::notifications::models::NotificationKind;

pub(crate) async fn transition_application(
    ctx: &RequestContext,
    application: &Application,
    posting: &JobPosting,
    to: ApplicationStatus,
    result: Option<&str>,
    tx: &mut Transaction<'_, Postgres>,
) -> DomainResult<Application> {
    let from = application
        .current_status()
        .map_err(|e| DomainError::Conflict(e.to_string()))?;

    if from.is_terminal() {
        return Err(DomainError::Conflict(format!(
            "application is already {}",
            from
        )));
    }

    match ApplicationStatus::required_actor(to) {
        Some(RequiredActor::Applicant) => {
            ctx.require_self(application.user_id, "withdraw this application")?;
        }
        Some(RequiredActor::OwningEmployer) => {
            ctx.require(RoleKind::Employer)?;
            if posting.employer_id != ctx.actor {
                return Err(DomainError::denied(
                    "only the employer who owns this posting may do that",
                ));
            }
        }
        // Never a legal target; fall through to the edge check for the error.
        None => {}
    }

    if !from.allows(to) {
        return Err(DomainError::Conflict(format!(
            "cannot move application from {} to {}",
            from, to
        )));
    }

    let updated = Application::update_status(application.id, to, result, tx).await?;

    notify_in_tx(
        updated.user_id,
        NotificationKind::StatusUpdate,
        &format!("Your application for \"{}\" is now {}", posting.title, to),
        Some(&format!("/applications/{}", updated.id)),
        tx,
    )
    .await?;

    if matches!(to, ApplicationStatus::Offered | ApplicationStatus::Rejected) {
        // Employer-side audit trail; log-only and non-blocking.
        info!(
            employer = %posting.employer_id,
            application_id = %updated.id,
            job_posting_id = %posting.id,
            outcome = %to,
            "Application decided"
        );
    }

    Ok(updated)
}
