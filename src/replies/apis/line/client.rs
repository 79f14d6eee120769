use async_trait::async_trait;

use crate::{
    app::models::api_error::ApiError,
    replies::{errors::RepliesApiError, models::reply_payload::ReplyPayload, sender::ReplySender},
};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub channel_access_token: String,
}

#[derive(Debug, Clone)]
pub struct LineClient {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl LineClient {
    pub fn new(config: Config, http_client: reqwest::Client) -> LineClient {
        LineClient {
            config,
            http_client,
        }
    }

    fn reply_url(&self) -> String {
        format!(
            "{}/v2/bot/message/reply",
            self.config.api_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply(&self, payload: &ReplyPayload) -> Result<(), ApiError> {
        let result = self
            .http_client
            .post(self.reply_url())
            .bearer_auth(&self.config.channel_access_token)
            .json(payload)
            .send()
            .await;

        match result {
            Ok(res) => {
                if res.status().is_success() {
                    return Ok(());
                }

                let status = res.status();
                tracing::error!("line reply responded with {}: {:?}", status, res.text().await);
                Err(RepliesApiError::DispatchRejected(status).value())
            }
            Err(e) => {
                tracing::error!(%e, "line reply request failed");
                Err(RepliesApiError::DispatchFailed.value())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        extract::State,
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::sync::Mutex;

    use crate::app::util::{reqwest::build_client, testing::spawn_server};

    use super::*;

    type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    fn client(api_url: String) -> LineClient {
        LineClient::new(
            Config {
                api_url,
                channel_access_token: "line-token".to_string(),
            },
            build_client(Duration::from_millis(500)).unwrap(),
        )
    }

    async fn capture(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        captured.lock().await.push((authorization, body));

        Json(json!({}))
    }

    #[tokio::test]
    async fn posts_reply_with_bearer_token() {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route("/v2/bot/message/reply", post(capture))
            .with_state(captured.clone());
        let base_url = spawn_server(router).await;

        client(base_url)
            .reply(&ReplyPayload::text("token-1", "Alice, Bob"))
            .await
            .unwrap();

        let captured = captured.lock().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0.as_deref(), Some("Bearer line-token"));
        assert_eq!(
            captured[0].1,
            json!({
                "replyToken": "token-1",
                "messages": [{ "type": "text", "text": "Alice, Bob" }]
            })
        );
    }

    #[tokio::test]
    async fn rejected_reply_is_an_error() {
        let router = Router::new().route(
            "/v2/bot/message/reply",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "message": "Invalid reply token" }))) }),
        );
        let base_url = spawn_server(router).await;

        let err = client(base_url)
            .reply(&ReplyPayload::text("used-token", "Alice"))
            .await
            .unwrap_err();

        assert_eq!(
            err.message,
            RepliesApiError::DispatchRejected(StatusCode::BAD_REQUEST).value().message
        );
    }

    #[tokio::test]
    async fn slow_platform_times_out() {
        let router = Router::new().route(
            "/v2/bot/message/reply",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::OK
            }),
        );
        let base_url = spawn_server(router).await;

        let err = client(base_url)
            .reply(&ReplyPayload::text("token-1", "Alice"))
            .await
            .unwrap_err();

        assert_eq!(err.message, RepliesApiError::DispatchFailed.value().message);
    }
}
