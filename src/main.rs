use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    app::envy::Envy,
    directory::{apis::google_sheets, source::DirectorySource},
    replies::{apis::line, sender::ReplySender},
    webhooks::line::signature::SignatureVerifier,
};

mod app;
mod directory;
mod replies;
mod webhooks;

// LINE webhook bodies are small; anything bigger is not from LINE
const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<SignatureVerifier>,
    pub directory: Arc<dyn DirectorySource>,
    pub replier: Arc<dyn ReplySender>,
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        .route(
            "/webhook",
            post(webhooks::line::controller::receive_webhook),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // error boundary: panics, timeouts and middleware errors become 500s
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(app::errors::handle_panic))
                .layer(HandleErrorLayer::new(app::errors::handle_middleware_error))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(3000);
    let upstream_timeout = Duration::from_secs(envy.upstream_timeout_secs);
    let request_timeout = upstream_timeout * 2 + Duration::from_secs(1);

    let http_client = match app::util::reqwest::build_client(upstream_timeout) {
        Ok(client) => client,
        Err(e) => panic!("failed to build http client: {:#?}", e),
    };

    let verifier = SignatureVerifier::new(envy.line_channel_secret.clone());
    if !verifier.has_secret() {
        tracing::warn!("LINE_CHANNEL_SECRET is not set, every webhook will be rejected");
    }

    let sheets = google_sheets::client::GoogleSheetsClient::new(
        google_sheets::client::Config {
            api_url: envy.sheets_api_url.to_owned(),
            api_key: envy.google_api_key.to_owned(),
            spreadsheet_id: envy.spreadsheet_id.to_owned(),
            range: envy.spreadsheet_range.to_owned(),
        },
        http_client.clone(),
    );

    let line = line::client::LineClient::new(
        line::client::Config {
            api_url: envy.line_api_url.to_owned(),
            channel_access_token: envy.line_channel_access_token.to_owned(),
        },
        http_client,
    );

    let state = AppState {
        verifier: Arc::new(verifier),
        directory: Arc::new(sheets),
        replier: Arc::new(line),
    };

    // app
    let app = create_router(state, request_timeout);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("{} listening on {}", envy.app_env, addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(%e, "server stopped");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for shutdown signal");
        return;
    }

    tracing::info!("shutting down");
}
