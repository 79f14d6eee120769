//! Fakes and helpers shared by the test modules.

use std::{
    net::{SocketAddr, TcpListener},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{http::StatusCode, Router};
use tokio::sync::Mutex;

use crate::{
    app::models::api_error::ApiError,
    directory::{models::directory_record::DirectoryRecord, source::DirectorySource},
    replies::{models::reply_payload::ReplyPayload, sender::ReplySender},
    webhooks::line::signature::SignatureVerifier,
    AppState,
};

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());

    tokio::spawn(server);

    format!("http://{}", addr)
}

#[derive(Clone, Default)]
pub struct FakeDirectory {
    pub records: Vec<DirectoryRecord>,
    pub fail: bool,
    pub panic: bool,
    pub delay: Option<Duration>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeDirectory {
    pub fn new(records: Vec<DirectoryRecord>) -> FakeDirectory {
        FakeDirectory {
            records,
            ..Default::default()
        }
    }

    pub fn failing() -> FakeDirectory {
        FakeDirectory {
            fail: true,
            ..Default::default()
        }
    }

    pub fn panicking() -> FakeDirectory {
        FakeDirectory {
            panic: true,
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> FakeDirectory {
        FakeDirectory {
            delay: Some(delay),
            ..Default::default()
        }
    }
}

#[async_trait]
impl DirectorySource for FakeDirectory {
    async fn fetch_records(&self) -> Result<Vec<DirectoryRecord>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.panic {
            panic!("directory exploded");
        }
        if self.fail {
            return Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "directory unavailable".to_string(),
            });
        }

        Ok(self.records.clone())
    }
}

#[derive(Clone, Default)]
pub struct FakeReplier {
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
    pub payloads: Arc<Mutex<Vec<ReplyPayload>>>,
}

impl FakeReplier {
    pub fn new() -> FakeReplier {
        FakeReplier::default()
    }

    pub fn failing() -> FakeReplier {
        FakeReplier {
            fail: true,
            ..Default::default()
        }
    }

    pub async fn sent(&self) -> Vec<ReplyPayload> {
        self.payloads.lock().await.clone()
    }
}

#[async_trait]
impl ReplySender for FakeReplier {
    async fn reply(&self, payload: &ReplyPayload) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "platform unavailable".to_string(),
            });
        }

        self.payloads.lock().await.push(payload.clone());
        Ok(())
    }
}

pub fn test_state(
    secret: Option<&str>,
    directory: FakeDirectory,
    replier: FakeReplier,
) -> AppState {
    AppState {
        verifier: Arc::new(SignatureVerifier::new(secret.map(str::to_string))),
        directory: Arc::new(directory),
        replier: Arc::new(replier),
    }
}
