use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::{
    GetDashboardStatsUseCase, GetRecentActivityUseCase, GetTopMatchesUseCase,
};
use crate::presentation::http::dto::{
    ActivityItemDto, ApiResponse, DashboardStatsDto, FETCH_FAILED, TopMatchDto,
};

pub struct DashboardHandler {
    get_stats_use_case: Arc<GetDashboardStatsUseCase>,
    get_recent_activity_use_case: Arc<GetRecentActivityUseCase>,
    get_top_matches_use_case: Arc<GetTopMatchesUseCase>,
}

impl DashboardHandler {
    pub fn new(
        get_stats_use_case: Arc<GetDashboardStatsUseCase>,
        get_recent_activity_use_case: Arc<GetRecentActivityUseCase>,
        get_top_matches_use_case: Arc<GetTopMatchesUseCase>,
    ) -> Self {
        Self {
            get_stats_use_case,
            get_recent_activity_use_case,
            get_top_matches_use_case,
        }
    }

    pub async fn get_stats(
        State(handler): State<Arc<DashboardHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.get_stats_use_case.execute().await {
            Ok(stats) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(DashboardStatsDto::from(stats))),
            )),
            Err(e) => {
                tracing::error!("Failed to fetch dashboard stats: {}", e);
                Ok((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<DashboardStatsDto>::error(
                        FETCH_FAILED,
                        "Failed to fetch dashboard stats".to_string(),
                        Some(e.to_string()),
                    )),
                ))
            }
        }
    }

    pub async fn get_recent_activity(
        State(handler): State<Arc<DashboardHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.get_recent_activity_use_case.execute().await {
            Ok(items) => {
                let activity: Vec<ActivityItemDto> =
                    items.into_iter().map(ActivityItemDto::from).collect();
                Ok((StatusCode::OK, Json(ApiResponse::success(activity))))
            }
            Err(e) => {
                tracing::error!("Failed to fetch recent activity: {}", e);
                Ok((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Vec<ActivityItemDto>>::error(
                        FETCH_FAILED,
                        "Failed to fetch recent activity".to_string(),
                        Some(e.to_string()),
                    )),
                ))
            }
        }
    }

    pub async fn get_top_matches(
        State(handler): State<Arc<DashboardHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.get_top_matches_use_case.execute().await {
            Ok(top_matches) => {
                let dto: Vec<TopMatchDto> =
                    top_matches.into_iter().map(TopMatchDto::from).collect();
                Ok((StatusCode::OK, Json(ApiResponse::success(dto))))
            }
            Err(e) => {
                tracing::error!("Failed to fetch top matches: {}", e);
                Ok((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Vec<TopMatchDto>>::error(
                        FETCH_FAILED,
                        "Failed to fetch top matches".to_string(),
                        Some(e.to_string()),
                    )),
                ))
            }
        }
    }
}
