//! Shared fixtures for integration tests.
//!
//! All entities are keyed by fresh UUIDs, so tests can share one database
//! without stepping on each other.

use chrono::Utc;
use sqlx::PgPool;

use recruit_core::common::{JobId, RequestContext, RoleKind, UserId};
use recruit_core::domains::accounts::actions::capabilities_of;
use recruit_core::domains::accounts::models::{RoleGrant, User};
use recruit_core::domains::jobs::JobPosting;

/// Insert a bare user with no roles.
pub async fn create_user(pool: &PgPool) -> User {
    let id = UserId::new();
    User {
        id,
        username: format!("user-{}", id),
        email: format!("{}@example.com", id),
        active_role: None,
        created_at: Utc::now(),
    }
    .insert(pool)
    .await
    .expect("Failed to insert user")
}

/// Resolve a request context the way the entry point would: capabilities
/// read once from the role ledger.
pub async fn ctx_for(user: UserId, pool: &PgPool) -> RequestContext {
    let caps = capabilities_of(user, pool)
        .await
        .expect("Failed to resolve capabilities");
    RequestContext::new(user, caps)
}

/// A user holding an approved grant for `role`.
pub async fn create_user_with_role(role: RoleKind, pool: &PgPool) -> (User, RequestContext) {
    let user = create_user(pool).await;
    RoleGrant::upsert_request(user.id, role, true, pool)
        .await
        .expect("Failed to grant role");
    let ctx = ctx_for(user.id, pool).await;
    (user, ctx)
}

pub async fn create_job_seeker(pool: &PgPool) -> (User, RequestContext) {
    create_user_with_role(RoleKind::JobSeeker, pool).await
}

pub async fn create_employer(pool: &PgPool) -> (User, RequestContext) {
    create_user_with_role(RoleKind::Employer, pool).await
}

pub async fn create_admin(pool: &PgPool) -> (User, RequestContext) {
    create_user_with_role(RoleKind::Admin, pool).await
}

/// A published posting owned by `employer`.
pub async fn create_published_posting(employer: UserId, pool: &PgPool) -> JobPosting {
    JobPosting {
        id: JobId::new(),
        employer_id: employer,
        title: "Backend Engineer".to_string(),
        description: "Build the workflow engine".to_string(),
        published: true,
        created_at: Utc::now(),
    }
    .insert(pool)
    .await
    .expect("Failed to insert job posting")
}

/// An unpublished posting owned by `employer`.
pub async fn create_draft_posting(employer: UserId, pool: &PgPool) -> JobPosting {
    JobPosting {
        id: JobId::new(),
        employer_id: employer,
        title: "Draft role".to_string(),
        description: String::new(),
        published: false,
        created_at: Utc::now(),
    }
    .insert(pool)
    .await
    .expect("Failed to insert draft posting")
}
