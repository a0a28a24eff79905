//! Web server wiring: the static form page plus the JSON API

use anyhow::{Context, Result};
use axum::{Router, response::Html, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .nest("/api", api::router(state))
        .layer(cors)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Bind and serve until the process is terminated
pub async fn run(port: u16, state: AppState) -> Result<()> {
    let app = app(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{port}");
    axum::serve(listener, app)
        .await
        .with_context(|| "Web server terminated unexpectedly")?;
    Ok(())
}
