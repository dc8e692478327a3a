//! Route handlers for the metrics query service.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use reglens_core::{AgencyRecord, HealthReport, Snapshot};
use reglens_storage::MetricsStore;

use crate::error::ApiError;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The metrics store all reads go through.
    pub store: MetricsStore,
}

/// Builds the API router.
///
/// CORS runs wide open: the grid is a public read-only surface.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/agencies", get(list_agencies))
        .route("/api/agency/{name}", get(agency_detail))
        .route("/api/top-agencies", get(top_agencies))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /api/agencies` — the complete snapshot as a JSON array.
///
/// No query parameters and no server-side pagination; the client re-sorts.
async fn list_agencies(State(state): State<AppState>) -> Result<Json<Snapshot>, ApiError> {
    let snapshot = state.store.list_agencies().await?;
    Ok(Json(snapshot))
}

/// `GET /api/agency/{name}` — one agency with its refresh timestamp.
async fn agency_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AgencyRecord>, ApiError> {
    let record = state.store.get_agency(&name).await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
struct TopParams {
    #[serde(default = "default_top_limit")]
    limit: u32,
}

fn default_top_limit() -> u32 {
    10
}

/// One entry of the top-agencies ranking.
#[derive(Debug, Serialize)]
struct TopAgency {
    name: String,
    word_count: u64,
}

/// `GET /api/top-agencies?limit=N` — highest word counts first.
async fn top_agencies(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Result<Json<Vec<TopAgency>>, ApiError> {
    let top = state.store.top_agencies(params.limit).await?;
    let ranking = top
        .into_iter()
        .map(|m| TopAgency {
            name: m.name,
            word_count: m.word_count,
        })
        .collect();
    Ok(Json(ranking))
}

/// `GET /api/health` — liveness report.
async fn health() -> Json<HealthReport> {
    Json(HealthReport::healthy())
}
