use std::sync::Arc;

use crate::application::use_cases::pagination::validate_page;
use crate::domain::entities::Consultant;
use crate::domain::repositories::{ConsultantRepository, RepositoryError};

#[derive(Debug)]
pub enum ListConsultantsError {
    RepositoryError(String),
    ValidationError(String),
}

impl std::fmt::Display for ListConsultantsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListConsultantsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            ListConsultantsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ListConsultantsError {}

impl From<RepositoryError> for ListConsultantsError {
    fn from(error: RepositoryError) -> Self {
        ListConsultantsError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ListConsultantsRequest {
    pub active_only: bool,
    pub skip: i64,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct ListConsultantsResponse {
    pub consultants: Vec<Consultant>,
    pub total_count: i64,
    pub skip: i64,
    pub limit: i64,
}

pub struct ListConsultantsUseCase {
    consultant_repository: Arc<dyn ConsultantRepository>,
}

impl ListConsultantsUseCase {
    pub fn new(consultant_repository: Arc<dyn ConsultantRepository>) -> Self {
        Self {
            consultant_repository,
        }
    }

    pub async fn execute(
        &self,
        request: ListConsultantsRequest,
    ) -> Result<ListConsultantsResponse, ListConsultantsError> {
        validate_page(request.skip, request.limit).map_err(ListConsultantsError::ValidationError)?;

        let consultants = self
            .consultant_repository
            .find_all(request.active_only, request.skip, request.limit)
            .await?;
        let total_count = self.consultant_repository.count(request.active_only).await?;

        Ok(ListConsultantsResponse {
            consultants,
            total_count,
            skip: request.skip,
            limit: request.limit,
        })
    }
}
