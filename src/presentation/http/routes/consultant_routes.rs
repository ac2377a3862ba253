use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

use crate::presentation::http::handlers::ConsultantHandler;

pub fn consultant_routes(consultant_handler: Arc<ConsultantHandler>) -> Router {
    Router::new()
        .route("/api/consultants", get(ConsultantHandler::list_consultants))
        .route(
            "/api/consultants/{consultant_id}",
            delete(ConsultantHandler::delete_consultant),
        )
        .with_state(consultant_handler)
}
