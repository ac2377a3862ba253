use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    ListEmailsUseCase,
    list_emails::{ListEmailsError, ListEmailsRequest},
};
use crate::presentation::http::dto::{
    ApiResponse, EmailListResponseDto, EmailQueryDto, EmailResponseDto, FETCH_FAILED,
    INVALID_REQUEST, PaginationMetaDto,
};

pub struct EmailHandler {
    list_emails_use_case: Arc<ListEmailsUseCase>,
}

impl EmailHandler {
    pub fn new(list_emails_use_case: Arc<ListEmailsUseCase>) -> Self {
        Self {
            list_emails_use_case,
        }
    }

    pub async fn list_emails(
        State(handler): State<Arc<EmailHandler>>,
        Query(query): Query<EmailQueryDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = ListEmailsRequest {
            status: query.status,
            skip: query.skip,
            limit: query.limit,
        };

        match handler.list_emails_use_case.execute(request).await {
            Ok(response) => {
                let dto = EmailListResponseDto {
                    emails: response
                        .emails
                        .into_iter()
                        .map(EmailResponseDto::from)
                        .collect(),
                    meta: PaginationMetaDto {
                        offset: response.skip,
                        limit: response.limit,
                        total: response.total_count,
                    },
                };

                Ok((StatusCode::OK, Json(ApiResponse::success(dto))))
            }
            Err(ListEmailsError::ValidationError(msg)) => Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<EmailListResponseDto>::error(
                    INVALID_REQUEST,
                    msg,
                    None,
                )),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EmailListResponseDto>::error(
                    FETCH_FAILED,
                    e.to_string(),
                    None,
                )),
            )),
        }
    }
}
