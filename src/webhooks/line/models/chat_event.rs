pub const MESSAGE_EVENT: &str = "message";
pub const TEXT_MESSAGE: &str = "text";

/// A `message`/`text` event ready to be answered. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    pub event_type: String,
    pub message_kind: String,
    pub text: String,
    pub reply_token: String,
    pub user_id: Option<String>,
}
