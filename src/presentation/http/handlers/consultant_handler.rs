use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    ListConsultantsUseCase, RemoveConsultantUseCase,
    list_consultants::{ListConsultantsError, ListConsultantsRequest},
    remove_consultant::RemoveConsultantError,
};
use crate::presentation::http::dto::{
    ApiResponse, ConsultantListResponseDto, ConsultantQueryDto, ConsultantResponseDto,
    FETCH_FAILED, INVALID_REQUEST, MessageResponseDto, NOT_FOUND, PaginationMetaDto,
};

pub struct ConsultantHandler {
    list_consultants_use_case: Arc<ListConsultantsUseCase>,
    remove_consultant_use_case: Arc<RemoveConsultantUseCase>,
}

impl ConsultantHandler {
    pub fn new(
        list_consultants_use_case: Arc<ListConsultantsUseCase>,
        remove_consultant_use_case: Arc<RemoveConsultantUseCase>,
    ) -> Self {
        Self {
            list_consultants_use_case,
            remove_consultant_use_case,
        }
    }

    pub async fn list_consultants(
        State(handler): State<Arc<ConsultantHandler>>,
        Query(query): Query<ConsultantQueryDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = ListConsultantsRequest {
            active_only: query.active,
            skip: query.skip,
            limit: query.limit,
        };

        match handler.list_consultants_use_case.execute(request).await {
            Ok(response) => {
                let dto = ConsultantListResponseDto {
                    consultants: response
                        .consultants
                        .into_iter()
                        .map(ConsultantResponseDto::from)
                        .collect(),
                    meta: PaginationMetaDto {
                        offset: response.skip,
                        limit: response.limit,
                        total: response.total_count,
                    },
                };

                Ok((StatusCode::OK, Json(ApiResponse::success(dto))))
            }
            Err(ListConsultantsError::ValidationError(msg)) => Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<ConsultantListResponseDto>::error(
                    INVALID_REQUEST,
                    msg,
                    None,
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ConsultantListResponseDto>::error(
                    FETCH_FAILED,
                    e.to_string(),
                    None,
                )),
            )),
        }
    }

    pub async fn delete_consultant(
        State(handler): State<Arc<ConsultantHandler>>,
        Path(consultant_id): Path<i32>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.remove_consultant_use_case.execute(consultant_id).await {
            Ok(()) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(MessageResponseDto {
                    message: format!("Consultant {} deleted", consultant_id),
                })),
            )),
            Err(RemoveConsultantError::ConsultantNotFound(id)) => Ok((
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MessageResponseDto>::error(
                    NOT_FOUND,
                    format!("Consultant {} not found", id),
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
