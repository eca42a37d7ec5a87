//! Local JSON file server for ad-hoc inspection.
//!
//! Exposes a single `GET /data` endpoint that re-reads the backing file
//! on every request, so edits show up without a restart.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

/// Default listen port for `quartermap serve`.
pub const DEFAULT_PORT: u16 = 8000;

/// Build the router serving the JSON document at `/data`.
pub fn router(json_path: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/data", get(serve_data))
        .layer(cors)
        .with_state(Arc::new(json_path))
}

async fn serve_data(State(path): State<Arc<PathBuf>>) -> impl IntoResponse {
    let raw = match std::fs::read_to_string(path.as_ref()) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return (StatusCode::NOT_FOUND, "File not found".to_string()).into_response();
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {e}"),
            )
                .into_response();
        }
    };

    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Server error: {e}"),
        )
            .into_response(),
    }
}

/// Bind the port and serve until interrupted.
pub async fn start(json_path: PathBuf, port: u16) -> anyhow::Result<()> {
    let app = router(json_path);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("serving JSON at http://{addr}/data");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
