use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    ListJobRequirementsUseCase, RemoveJobRequirementUseCase,
    list_job_requirements::{ListJobRequirementsError, ListJobRequirementsRequest},
    remove_job_requirement::RemoveJobRequirementError,
};
use crate::presentation::http::dto::{
    ApiResponse, FETCH_FAILED, INVALID_REQUEST, JobRequirementListResponseDto,
    JobRequirementQueryDto, JobRequirementResponseDto, MessageResponseDto, NOT_FOUND,
    PaginationMetaDto,
};

pub struct JobRequirementHandler {
    list_job_requirements_use_case: Arc<ListJobRequirementsUseCase>,
    remove_job_requirement_use_case: Arc<RemoveJobRequirementUseCase>,
}

impl JobRequirementHandler {
    pub fn new(
        list_job_requirements_use_case: Arc<ListJobRequirementsUseCase>,
        remove_job_requirement_use_case: Arc<RemoveJobRequirementUseCase>,
    ) -> Self {
        Self {
            list_job_requirements_use_case,
            remove_job_requirement_use_case,
        }
    }

    pub async fn list_job_requirements(
        State(handler): State<Arc<JobRequirementHandler>>,
        Query(query): Query<JobRequirementQueryDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = ListJobRequirementsRequest {
            status: query.status,
            skip: query.skip,
            limit: query.limit,
        };

        match handler.list_job_requirements_use_case.execute(request).await {
            Ok(response) => {
                let dto = JobRequirementListResponseDto {
                    job_requirements: response
                        .job_requirements
                        .into_iter()
                        .map(JobRequirementResponseDto::from)
                        .collect(),
                    meta: PaginationMetaDto {
                        offset: response.skip,
                        limit: response.limit,
                        total: response.total_count,
                    },
                };

                Ok((StatusCode::OK, Json(ApiResponse::success(dto))))
            }
            Err(ListJobRequirementsError::ValidationError(msg)) => Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<JobRequirementListResponseDto>::error(
                    INVALID_REQUEST,
                    msg,
                    None,
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<JobRequirementListResponseDto>::error(
                    FETCH_FAILED,
                    e.to_string(),
                    None,
                )),
            )),
        }
    }

    pub async fn delete_job_requirement(
        State(handler): State<Arc<JobRequirementHandler>>,
        Path(job_id): Path<i32>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.remove_job_requirement_use_case.execute(job_id).await {
            Ok(()) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(MessageResponseDto {
                    message: format!("Job requirement {} deleted", job_id),
                })),
            )),
            Err(RemoveJobRequirementError::JobRequirementNotFound(id)) => Ok((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MessageResponseDto>::error(
                    NOT_FOUND,
                    format!("Job requirement {} not found", id),
                    None,
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MessageResponseDto>::error(
                    FETCH_FAILED,
                    e.to_string(),
                    None,
                )),
            )),
        }
    }
}
