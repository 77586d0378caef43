//! Policy search and stats handlers

use axum::{extract::State, Json};

use crate::{
    services::{SearchRequest, SearchResult, StatsResult},
    state::AppState,
    Result,
};

/// Search policies (POST /api/search)
///
/// The body carries the UI grid's filter and sort entries plus pagination
/// bounds. Unrecognized filter shapes are absorbed by the compiler rather
/// than rejected; store failures surface as 500.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResult>> {
    tracing::debug!(
        filters = request.filter_entries.len(),
        sorts = request.sort_entries.len(),
        from = request.from,
        size = request.size,
        "Incoming search request"
    );

    let result = state.search_service.search(&request).await?;
    Ok(Json(result))
}

/// Line-of-business stats (GET /api/line-of-business-stats)
pub async fn line_of_business_stats(State(state): State<AppState>) -> Result<Json<StatsResult>> {
    let stats = state.stats_service.line_of_business_stats().await?;
    Ok(Json(stats))
}
