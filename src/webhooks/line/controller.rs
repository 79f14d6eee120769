use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};
use axum_macros::debug_handler;
use bytes::Bytes;

use crate::{app::models::api_error::ApiError, AppState};

use super::{errors::WebhooksApiError, service, SIGNATURE_HEADER};

#[debug_handler]
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    if !state.verifier.verify(&body, signature) {
        tracing::warn!("rejected webhook with invalid signature");
        return Err(WebhooksApiError::InvalidSignature.value());
    }

    let outcome = service::handle_webhook(&body, &state).await;
    tracing::debug!(?outcome, "webhook handled");

    Ok(StatusCode::OK)
}
