use crate::bot::SimpleBot;
use crate::error::ChatError;
use crate::models::chat::ChatReply;
use crate::server::assets;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use serde_json::Value as JsonValue;
use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Largest request body `POST /api/chat` will buffer.
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(Clone, Default)]
pub struct AppState {
    bot: SimpleBot,
}

impl AppState {
    pub fn new(bot: SimpleBot) -> Self {
        Self { bot }
    }
}

pub fn router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(assets::index_handler))
        .route("/style.css", get(assets::style_handler))
        .route("/app.js", get(assets::script_handler))
        .route(
            "/api/chat",
            post(chat_handler).layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
        .with_state(state);

    with_middleware(app)
}

/// CORS for every origin, and a JSON 500 body for anything that panics below it.
pub fn with_middleware(app: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(
        ServiceBuilder::new()
            .layer(cors)
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

pub async fn serve_plain(
    addr: SocketAddr,
    app: Router,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!(
            "Failed to bind HTTP server to {}: {}. Try a different port.",
            addr, e
        );
        e
    })?;
    info!("HTTP server listening on: http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

pub async fn serve_tls(
    addr: SocketAddr,
    app: Router,
    cert_path: &str,
    key_path: &str,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!(
        "TLS enabled. Loading certificate from '{}' and key from '{}'",
        cert_path, key_path
    );
    let tls_config =
        axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, key_path).await?;

    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_handle.graceful_shutdown(Some(Duration::from_secs(5)));
    });

    info!("HTTPS server listening on: https://{}", addr);
    axum_server::bind_rustls(addr, tls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    info!("HTTPS server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// The body is parsed here rather than through the `Json` extractor so that malformed JSON gets the
/// same 400 body as a missing message.
async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    let body = body.map_err(body_rejection)?;

    let payload: JsonValue = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            warn!("Chat request rejected, body is not valid JSON: {}", e);
            return Err(ChatError::MissingMessage);
        }
    };

    match state.bot.exchange(&payload) {
        Ok(exchange) => {
            info!(
                "Chat request answered at {} ({} chars received)",
                exchange.timestamp,
                exchange.text.chars().count()
            );
            Ok(Json(ChatReply::from(exchange)))
        }
        Err(e) => {
            warn!("Chat request rejected: {}", e);
            Err(e)
        }
    }
}

fn body_rejection(rejection: BytesRejection) -> ChatError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Chat request rejected, body exceeds {} bytes", MAX_BODY_SIZE);
        ChatError::TooLarge
    } else {
        ChatError::Internal(format!(
            "failed to read request body: {}",
            rejection.body_text()
        ))
    }
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    let err = ChatError::Internal(format!("handler panicked: {}", detail));
    err.into_response()
}
