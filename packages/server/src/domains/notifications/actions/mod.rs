//! Notification dispatcher actions.
//!
//! `notify` is fire-and-forget: workflows call it synchronously on success
//! and the row append is their only delivery obligation. Callers inside a
//! workflow transaction use `notify_in_tx` so the notification commits (or
//! aborts) atomically with the transition that caused it.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use crate::common::{DomainError, DomainResult, NotificationId, RequestContext, UserId};
use crate::domains::notifications::models::{Notification, NotificationKind};

/// Append a notification row (outside any workflow transaction).
pub async fn notify(
    recipient: UserId,
    kind: NotificationKind,
    message: &str,
    related_url: Option<&str>,
    pool: &PgPool,
) -> DomainResult<Notification> {
    let notification = Notification::insert(recipient, kind, message, related_url, pool).await?;
    debug!(recipient = %recipient, kind = %kind, "Notification recorded");
    Ok(notification)
}

/// Append a notification row inside a workflow transaction.
pub async fn notify_in_tx(
    recipient: UserId,
    kind: NotificationKind,
    message: &str,
    related_url: Option<&str>,
    tx: &mut Transaction<'_, Postgres>,
) -> DomainResult<Notification> {
    let notification =
        Notification::insert(recipient, kind, message, related_url, &mut **tx).await?;
    debug!(recipient = %recipient, kind = %kind, "Notification recorded");
    Ok(notification)
}

/// Mark a notification read. Only the recipient may do this.
pub async fn mark_notification_read(
    ctx: &RequestContext,
    notification_id: NotificationId,
    pool: &PgPool,
) -> DomainResult<Notification> {
    let notification = Notification::find_by_id(notification_id, pool)
        .await?
        .ok_or(DomainError::NotFound("notification"))?;

    ctx.require_self(notification.recipient_id, "read this notification")?;

    Ok(Notification::mark_read(notification_id, pool).await?)
}
