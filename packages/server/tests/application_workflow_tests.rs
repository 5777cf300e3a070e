//! Integration tests for the application and interview workflows.
//!
//! Covers the full happy path from apply through interview evaluation, the
//! edge table and terminal-state guards, actor gating per transition, and
//! interview cancellation returning the application to Viewed.

mod common;

use chrono::{Duration, Utc};

use crate::common::{
    create_employer, create_job_seeker, create_published_posting, create_draft_posting,
    TestHarness,
};
use recruit_core::common::DomainError;
use recruit_core::domains::applications::actions::{
    apply, cancel_interview, evaluate_interview, schedule_interview, update_application_status,
    withdraw,
};
use recruit_core::domains::applications::machines::{ApplicationStatus, InterviewResult};
use recruit_core::domains::applications::models::{Application, Interview};
use recruit_core::domains::jobs::JobPosting;
use recruit_core::domains::notifications::models::{Notification, NotificationKind};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn full_workflow_from_apply_to_offer(ctx: &TestHarness) {
    let (seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, Some("Hello"), &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(application.status, "applied");
    assert!(application.result.is_none());

    // Employer opens the application.
    let viewed = update_application_status(
        &employer_ctx,
        application.id,
        ApplicationStatus::Viewed,
        &ctx.db_pool,
    )
    .await
    .unwrap();
    assert_eq!(viewed.status, "viewed");

    // Scheduling moves the application to Interviewing and creates the
    // interview with a meeting reference.
    let interview = schedule_interview(
        &employer_ctx,
        application.id,
        Utc::now() + Duration::days(2),
        &ctx.db_pool,
    )
    .await
    .unwrap();
    assert_eq!(interview.status, "scheduled");
    assert!(interview.meeting_ref.starts_with("meet-"));

    let mid = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mid.status, "interviewing");

    // A passed evaluation drives the application to Offered atomically.
    let completed = evaluate_interview(
        &employer_ctx,
        interview.id,
        InterviewResult::Passed,
        Some("Strong systems background"),
        &ctx.db_pool,
    )
    .await
    .unwrap();
    assert_eq!(completed.status, "completed");
    assert_eq!(completed.result.as_deref(), Some("passed"));
    assert_eq!(completed.employer_notes.as_deref(), Some("Strong systems background"));

    let offered = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(offered.status, "offered");
    assert_eq!(offered.result.as_deref(), Some("passed"));

    // The applicant heard about every step: Viewed, Interviewing (status +
    // interview reminder), Offered.
    let unread = Notification::find_unread(seeker.id, &ctx.db_pool)
        .await
        .unwrap();
    let status_updates = unread
        .iter()
        .filter(|n| n.kind == NotificationKind::StatusUpdate.as_str())
        .count();
    assert_eq!(status_updates, 3);
    assert!(unread
        .iter()
        .any(|n| n.kind == NotificationKind::InterviewReminder.as_str()));

    // The interview is terminal now.
    let err = evaluate_interview(
        &employer_ctx,
        interview.id,
        InterviewResult::Failed,
        None,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_apply_is_a_conflict(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, _) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();
    let err = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unpublished_postings_reject_applications(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, _) = create_employer(&ctx.db_pool).await;
    let draft = create_draft_posting(employer.id, &ctx.db_pool).await;

    let err = apply(&seeker_ctx, draft.id, None, None, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    // Publishing opens the gate.
    JobPosting::set_published(draft.id, true, &ctx.db_pool)
        .await
        .unwrap();
    let application = apply(&seeker_ctx, draft.id, None, None, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(application.status, "applied");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn applying_requires_the_job_seeker_capability(ctx: &TestHarness) {
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let err = apply(&employer_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn only_the_applicant_may_withdraw(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();

    // Even the owning employer cannot withdraw on the applicant's behalf.
    let err = withdraw(&employer_ctx, application.id, &ctx.db_pool)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied(_)));

    let withdrawn = withdraw(&seeker_ctx, application.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(withdrawn.status, "withdrawn");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn terminal_state_wins_over_actor_checks(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();
    withdraw(&seeker_ctx, application.id, &ctx.db_pool)
        .await
        .unwrap();

    // The employer is the wrong actor for Withdrawn, but the application is
    // already terminal and that is reported first.
    let err = update_application_status(
        &employer_ctx,
        application.id,
        ApplicationStatus::Viewed,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    match err {
        DomainError::Conflict(msg) => assert!(msg.contains("already withdrawn"), "{msg}"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn transitions_off_the_edge_table_are_conflicts(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();

    // Applied -> Offered skips the pipeline.
    let err = update_application_status(
        &employer_ctx,
        application.id,
        ApplicationStatus::Offered,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    // Nothing moved.
    let reread = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.status, "applied");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn only_the_owning_employer_may_run_the_pipeline(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (owner, owner_ctx) = create_employer(&ctx.db_pool).await;
    let (_rival, rival_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(owner.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();

    let err = update_application_status(
        &rival_ctx,
        application.id,
        ApplicationStatus::Viewed,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied(_)));

    let err = schedule_interview(
        &rival_ctx,
        application.id,
        Utc::now() + Duration::days(1),
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied(_)));

    // Denied calls left no trace.
    let reread = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.status, "applied");

    // The owner can proceed normally.
    let interview = schedule_interview(
        &owner_ctx,
        application.id,
        Utc::now() + Duration::days(1),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    // Evaluation is gated the same way.
    let err = evaluate_interview(
        &rival_ctx,
        interview.id,
        InterviewResult::Passed,
        None,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::PermissionDenied(_)));

    let interview = Interview::find_by_id(interview.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(interview.status, "scheduled");
    let reread = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.status, "interviewing");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn interviews_cannot_be_scheduled_in_the_past(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();

    let err = schedule_interview(
        &employer_ctx,
        application.id,
        Utc::now() - Duration::hours(1),
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn failed_interviews_reject_the_application(ctx: &TestHarness) {
    let (_seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();
    let interview = schedule_interview(
        &employer_ctx,
        application.id,
        Utc::now() + Duration::days(1),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    evaluate_interview(
        &employer_ctx,
        interview.id,
        InterviewResult::Failed,
        None,
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let rejected = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rejected.status, "rejected");
    assert_eq!(rejected.result.as_deref(), Some("failed"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn cancelling_an_interview_returns_the_application_to_viewed(ctx: &TestHarness) {
    let (seeker, seeker_ctx) = create_job_seeker(&ctx.db_pool).await;
    let (employer, employer_ctx) = create_employer(&ctx.db_pool).await;
    let posting = create_published_posting(employer.id, &ctx.db_pool).await;

    let application = apply(&seeker_ctx, posting.id, None, None, &ctx.db_pool)
        .await
        .unwrap();
    let interview = schedule_interview(
        &employer_ctx,
        application.id,
        Utc::now() + Duration::days(1),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let cancelled = cancel_interview(&employer_ctx, interview.id, &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(cancelled.status, "cancelled");

    let reread = Application::find_by_id(application.id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.status, "viewed");

    // The applicant is told and can be rescheduled later.
    let unread = Notification::find_unread(seeker.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(unread.iter().any(|n| n.message.contains("cancelled")));

    // A cancelled interview cannot be evaluated.
    let err = evaluate_interview(
        &employer_ctx,
        interview.id,
        InterviewResult::Passed,
        None,
        &ctx.db_pool,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}
