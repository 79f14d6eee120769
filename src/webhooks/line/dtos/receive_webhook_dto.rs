use serde::Deserialize;
use serde_json::Value;

// https://developers.line.biz/en/reference/messaging-api/#request-body
#[derive(Debug, Deserialize)]
pub struct ReceiveWebhookDto {
    pub destination: Option<String>,
    // kept untyped so one odd event does not fail the whole body
    #[serde(default)]
    pub events: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ReceiveWebhookDtoEvent {
    #[serde(rename(deserialize = "type"))]
    pub event_type: String,
    #[serde(rename(deserialize = "replyToken"))]
    pub reply_token: Option<String>,
    pub message: Option<ReceiveWebhookDtoMessage>,
    pub source: Option<ReceiveWebhookDtoSource>,
}

#[derive(Debug, Deserialize)]
pub struct ReceiveWebhookDtoMessage {
    #[serde(rename(deserialize = "type"))]
    pub kind: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReceiveWebhookDtoSource {
    #[serde(rename(deserialize = "userId"))]
    pub user_id: Option<String>,
}
