use axum::{
    Router,
    routing::{delete, get},
};
use std::sync::Arc;

use crate::presentation::http::handlers::JobRequirementHandler;

pub fn job_requirement_routes(job_requirement_handler: Arc<JobRequirementHandler>) -> Router {
    Router::new()
        .route(
            "/api/job-requirements",
            get(JobRequirementHandler::list_job_requirements),
        )
        .route(
            "/api/job-requirements/{job_id}",
            delete(JobRequirementHandler::delete_job_requirement),
        )
        .with_state(job_requirement_handler)
}
