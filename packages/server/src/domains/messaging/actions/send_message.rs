//! Send message action - primary store first, then the best-effort mirror.

use tracing::info;

use crate::common::{DomainError, DomainResult, RequestContext, UserId};
use crate::domains::accounts::models::User;
use crate::domains::messaging::models::{Conversation, Message};
use crate::domains::notifications::actions::notify_in_tx;
use crate::domains::notifications::models::NotificationKind;
use crate::kernel::ServerDeps;

/// Send a chat message to another user.
///
/// The message row, the conversation's last_message_at bump and the
/// recipient's ChatMessage notification commit in one primary transaction;
/// success of that commit is success of the call. The mirror write happens
/// strictly after commit and its failure is logged, never surfaced.
pub async fn send_message(
    ctx: &RequestContext,
    recipient: UserId,
    content: &str,
    deps: &ServerDeps,
) -> DomainResult<Message> {
    if content.trim().is_empty() {
        return Err(DomainError::Validation("message content is empty".into()));
    }
    if recipient == ctx.actor {
        return Err(DomainError::Validation(
            "cannot send a message to yourself".into(),
        ));
    }

    User::find_by_id(recipient, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound("user"))?;

    let mut tx = deps.db_pool.begin().await?;

    let conversation = Conversation::find_or_create(ctx.actor, recipient, &mut tx).await?;
    let message = Message::insert(conversation.id, ctx.actor, content, &mut tx).await?;
    Conversation::touch(conversation.id, message.sent_at, &mut tx).await?;

    notify_in_tx(
        recipient,
        NotificationKind::ChatMessage,
        "You have a new message",
        Some(&format!("/conversations/{}", conversation.id)),
        &mut tx,
    )
    .await?;

    tx.commit().await?;

    // Outside the transaction boundary: best-effort, no rollback, no retry.
    deps.replicator.replicate_send(&message, recipient).await;

    info!(
        message_id = %message.id,
        conversation_id = %conversation.id,
        sender = %ctx.actor,
        "Message sent"
    );

    Ok(message)
}
