use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::models::reply_payload::ReplyPayload;

/// Sends one reply to the messaging platform. Callers never retry.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply(&self, payload: &ReplyPayload) -> Result<(), ApiError>;
}
