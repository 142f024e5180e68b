use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use crate::api::{
    ApiCompetitorRequest, ApiCompetitorResponse, ApiPostBatchRequest, ApiPostBatchResponse,
};
use social_optimizer::AnalysisEngine;

#[derive(Clone)]
struct AppState {
    engine: Arc<AnalysisEngine>,
    service_secret: Option<String>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let engine = crate::build_engine()?;
    let state = AppState {
        engine: Arc::new(engine),
        service_secret: env::var("SERVICE_SECRET")
            .ok()
            .filter(|value| !value.trim().is_empty()),
    };
    if state.service_secret.is_none() {
        tracing::warn!("SERVICE_SECRET not set; requests are unauthenticated");
    }

    let app = Router::new()
        .route("/health", get(health))
        .route("/analyze/posts", post(analyze_posts_handler))
        .route("/analyze/competitor", post(analyze_competitor_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    tracing::info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "service": "social-optimizer" }))
}

async fn analyze_posts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ApiPostBatchRequest>,
) -> Result<Json<ApiPostBatchResponse>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    tracing::info!(posts = request.posts.len(), "analyze_posts");

    let engine = state.engine.clone();
    let batch = tokio::task::spawn_blocking(move || engine.analyze_posts(&request.posts))
        .await
        .map_err(|err| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("analysis task failed: {}", err),
            )
        })?;

    Ok(Json(ApiPostBatchResponse::from_batch(batch)))
}

async fn analyze_competitor_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ApiCompetitorRequest>,
) -> Result<Json<ApiCompetitorResponse>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    tracing::info!(competitor = %request.competitor_username, "analyze_competitor");

    let engine = state.engine.clone();
    let report = tokio::task::spawn_blocking(move || {
        let (profile, posts, user) = request.into_parts();
        engine.analyze_competitor_gap(&profile, &posts, &user)
    })
    .await
    .map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("analysis task failed: {}", err),
        )
    })?;

    Ok(Json(ApiCompetitorResponse::from_report(report)))
}

// Internal auth mirroring the upstream orchestrator contract: when a secret
// is configured, every request must carry it.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let Some(secret) = state.service_secret.as_deref() else {
        return Ok(());
    };
    let provided = headers
        .get("x-service-secret")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if provided != secret {
        return Err((StatusCode::FORBIDDEN, "Forbidden".to_string()));
    }
    Ok(())
}
