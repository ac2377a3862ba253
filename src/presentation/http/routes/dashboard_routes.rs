use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::http::handlers::DashboardHandler;

pub fn dashboard_routes(dashboard_handler: Arc<DashboardHandler>) -> Router {
    Router::new()
        .route("/api/dashboard/stats", get(DashboardHandler::get_stats))
        .route(
            "/api/dashboard/recent-activity",
            get(DashboardHandler::get_recent_activity),
        )
        .route(
            "/api/dashboard/top-matches",
            get(DashboardHandler::get_top_matches),
        )
        .with_state(dashboard_handler)
}
