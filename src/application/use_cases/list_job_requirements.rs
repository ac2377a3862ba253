use std::sync::Arc;

use crate::application::use_cases::pagination::validate_page;
use crate::domain::entities::JobRequirement;
use crate::domain::repositories::{JobRequirementRepository, RepositoryError};
use crate::domain::value_objects::JobStatus;

#[derive(Debug)]
pub enum ListJobRequirementsError {
    RepositoryError(String),
    ValidationError(String),
}

impl std::fmt::Display for ListJobRequirementsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListJobRequirementsError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
            ListJobRequirementsError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ListJobRequirementsError {}

impl From<RepositoryError> for ListJobRequirementsError {
    fn from(error: RepositoryError) -> Self {
        ListJobRequirementsError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ListJobRequirementsRequest {
    /// Raw status label from the caller, parsed here.
    pub status: Option<String>,
    pub skip: i64,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct ListJobRequirementsResponse {
    pub job_requirements: Vec<JobRequirement>,
    pub total_count: i64,
    pub skip: i64,
    pub limit: i64,
}

pub struct ListJobRequirementsUseCase {
    job_requirement_repository: Arc<dyn JobRequirementRepository>,
}

impl ListJobRequirementsUseCase {
    pub fn new(job_requirement_repository: Arc<dyn JobRequirementRepository>) -> Self {
        Self {
            job_requirement_repository,
        }
    }

    pub async fn execute(
        &self,
        request: ListJobRequirementsRequest,
    ) -> Result<ListJobRequirementsResponse, ListJobRequirementsError> {
        validate_page(request.skip, request.limit)
            .map_err(ListJobRequirementsError::ValidationError)?;
        let status = request
            .status
            .as_deref()
            .map(JobStatus::from_string)
            .transpose()
            .map_err(ListJobRequirementsError::ValidationError)?;

        let job_requirements = self
            .job_requirement_repository
            .find_all(status, request.skip, request.limit)
            .await?;
        let total_count = self.job_requirement_repository.count(status).await?;

        Ok(ListJobRequirementsResponse {
            job_requirements,
            total_count,
            skip: request.skip,
            limit: request.limit,
        })
    }
}
