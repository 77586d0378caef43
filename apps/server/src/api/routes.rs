//! Policy API routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::policies;
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(policies::search))
        .route(
            "/line-of-business-stats",
            get(policies::line_of_business_stats),
        )
}
