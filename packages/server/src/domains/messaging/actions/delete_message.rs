//! Delete message action.

use tracing::info;

use crate::common::{DomainError, DomainResult, MessageId, RequestContext};
use crate::domains::messaging::models::{Conversation, Message};
use crate::kernel::ServerDeps;

/// Delete a message (sender only). The primary row is removed first, then
/// both mirror entries; a mirror failure leaves an orphan entry for the
/// operational reconciler, never a failed delete.
pub async fn delete_message(
    ctx: &RequestContext,
    message_id: MessageId,
    deps: &ServerDeps,
) -> DomainResult<()> {
    let message = Message::find_by_id(message_id, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound("message"))?;

    ctx.require_self(message.sender_id, "delete this message")?;

    let conversation = Conversation::find_by_id(message.conversation_id, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound("conversation"))?;

    Message::delete(message_id, &deps.db_pool).await?;

    let recipient = conversation.other_participant(message.sender_id);
    deps.replicator.replicate_delete(&message, recipient).await;

    info!(message_id = %message_id, "Message deleted");

    Ok(())
}
