//! Mark-read action.

use crate::common::{DomainError, DomainResult, MessageId, RequestContext};
use crate::domains::messaging::models::{Conversation, Message};
use crate::kernel::ServerDeps;

/// Mark a message read. Only the receiving participant may do this; the
/// primary store is updated first, then both mirror entries are patched.
pub async fn mark_message_read(
    ctx: &RequestContext,
    message_id: MessageId,
    deps: &ServerDeps,
) -> DomainResult<Message> {
    let message = Message::find_by_id(message_id, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound("message"))?;

    let conversation = Conversation::find_by_id(message.conversation_id, &deps.db_pool)
        .await?
        .ok_or(DomainError::NotFound("conversation"))?;

    if !conversation.involves(ctx.actor) || ctx.actor == message.sender_id {
        return Err(DomainError::denied(
            "only the recipient may mark this message read",
        ));
    }

    let updated = Message::mark_read(message_id, &deps.db_pool).await?;

    let recipient = conversation.other_participant(updated.sender_id);
    deps.replicator.replicate_read(&updated, recipient).await;

    Ok(updated)
}
