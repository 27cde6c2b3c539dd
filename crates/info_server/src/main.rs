use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use shared::{
    error::{ApiError, ApiException, ErrorCode},
    protocol::{info_route, InfoResponse},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::load_settings;

struct AppState {
    app_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = load_settings();
    let addr = settings.bind_addr()?;
    let app = build_router(Arc::new(AppState {
        app_name: settings.app_name,
    }));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind info server to {addr}"))?;
    info!(%addr, route = info_route(), "info server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(info_route(), get(http_info))
        .fallback(not_found)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InfoResponse>, (StatusCode, Json<ApiError>)> {
    let app_name = configured_app_name(&state).map_err(|err| {
        warn!(error = %err, "refusing to serve info");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::from(err)))
    })?;
    Ok(Json(InfoResponse { app_name }))
}

fn configured_app_name(state: &AppState) -> Result<String, ApiException> {
    let name = state.app_name.trim();
    if name.is_empty() {
        return Err(ApiException::new(
            ErrorCode::Internal,
            "application name is not configured",
        ));
    }
    Ok(name.to_string())
}

async fn not_found() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(ErrorCode::NotFound, "no such route")),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
