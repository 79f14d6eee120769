use serde::Serialize;

// https://developers.line.biz/en/reference/messaging-api/#send-reply-message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPayload {
    pub reply_token: String,
    pub messages: Vec<ReplyMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplyMessage {
    Text { text: String },
}

impl ReplyPayload {
    pub fn text(reply_token: impl Into<String>, text: impl Into<String>) -> ReplyPayload {
        ReplyPayload {
            reply_token: reply_token.into(),
            messages: vec![ReplyMessage::Text { text: text.into() }],
        }
    }
}
