use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::CheckHealthUseCase;
use crate::presentation::http::dto::{ApiResponse, HealthResponseDto};

pub struct HealthHandler {
    check_health_use_case: Arc<CheckHealthUseCase>,
}

impl HealthHandler {
    pub fn new(check_health_use_case: Arc<CheckHealthUseCase>) -> Self {
        Self {
            check_health_use_case,
        }
    }

    pub async fn banner() -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(ApiResponse::success("BenchPilot Dashboard".to_string())),
        )
    }

    pub async fn health(State(handler): State<Arc<HealthHandler>>) -> impl IntoResponse {
        let report = handler.check_health_use_case.execute().await;
        let (status, label, store) = if report.store_reachable {
            (StatusCode::OK, "healthy", "reachable")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        };

        let health_response = HealthResponseDto {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
        };

        (status, Json(ApiResponse::success(health_response)))
    }
}
