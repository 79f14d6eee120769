use crate::{
    directory,
    replies::{self, models::reply_payload::ReplyPayload},
    AppState,
};

use super::{
    dtos::receive_webhook_dto::{ReceiveWebhookDto, ReceiveWebhookDtoEvent},
    models::chat_event::{ChatEvent, MESSAGE_EVENT, TEXT_MESSAGE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Ignored,
    Replied,
    ReplyFailed,
}

/// Pulls the first event out of an authenticated body. Anything other than a
/// `message` event carrying a `text` message and a reply token is `None`.
pub fn extract_chat_event(body: &[u8]) -> Option<ChatEvent> {
    let dto: ReceiveWebhookDto = match serde_json::from_slice(body) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!(%e, "webhook body is not a LINE payload");
            return None;
        }
    };

    let Some(first) = dto.events.into_iter().next() else {
        tracing::debug!(destination = ?dto.destination, "webhook carried no events");
        return None;
    };

    let event: ReceiveWebhookDtoEvent = match serde_json::from_value(first) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(%e, "unreadable webhook event");
            return None;
        }
    };

    if event.event_type != MESSAGE_EVENT {
        tracing::debug!("ignoring {} event", event.event_type);
        return None;
    }

    let message = event.message?;
    if message.kind != TEXT_MESSAGE {
        tracing::debug!("ignoring {} message", message.kind);
        return None;
    }

    let (Some(text), Some(reply_token)) = (message.text, event.reply_token) else {
        tracing::debug!("text message without text or reply token");
        return None;
    };

    Some(ChatEvent {
        event_type: event.event_type,
        message_kind: message.kind,
        text,
        reply_token,
        user_id: event.source.and_then(|source| source.user_id),
    })
}

/// Runs the accepted half of the webhook: extract, look up, reply.
///
/// Lookup failures degrade to the not-found reply and send failures are only
/// logged; the caller acknowledges the webhook either way.
pub async fn handle_webhook(body: &[u8], state: &AppState) -> WebhookOutcome {
    let Some(event) = extract_chat_event(body) else {
        return WebhookOutcome::Ignored;
    };

    tracing::info!(
        user_id = ?event.user_id,
        "{}/{}: {}",
        event.event_type,
        event.message_kind,
        event.text
    );

    let records =
        match directory::service::find_records_by_category(state.directory.as_ref(), &event.text)
            .await
        {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(%e, "directory lookup failed, replying not found");
                Vec::new()
            }
        };

    let text = replies::service::format_reply_text(&records);
    let payload = ReplyPayload::text(event.reply_token, text);

    match state.replier.reply(&payload).await {
        Ok(_) => WebhookOutcome::Replied,
        Err(e) => {
            tracing::error!(%e, "failed to send reply");
            WebhookOutcome::ReplyFailed
        }
    }
}
