use std::sync::Arc;

use crate::application::use_cases::pagination::validate_page;
use crate::domain::entities::Email;
use crate::domain::repositories::{EmailRepository, RepositoryError};
use crate::domain::value_objects::EmailStatus;

#[derive(Debug)]
pub enum ListEmailsError {
    RepositoryError(String),
    ValidationError(String),
}

impl std::fmt::Display for ListEmailsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListEmailsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            ListEmailsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ListEmailsError {}

impl From<RepositoryError> for ListEmailsError {
    fn from(error: RepositoryError) -> Self {
        ListEmailsError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ListEmailsRequest {
    pub status: Option<String>,
    pub skip: i64,
    pub limit: i64,
}

#[derive(Debug, Clone)]
pub struct ListEmailsResponse {
    pub emails: Vec<Email>,
    pub total_count: i64,
    pub skip: i64,
    pub limit: i64,
}

pub struct ListEmailsUseCase {
    email_repository: Arc<dyn EmailRepository>,
}

impl ListEmailsUseCase {
    pub fn new(email_repository: Arc<dyn EmailRepository>) -> Self {
        Self { email_repository }
    }

    pub async fn execute(
        &self,
        request: ListEmailsRequest,
    ) -> Result<ListEmailsResponse, ListEmailsError> {
        validate_page(request.skip, request.limit).map_err(ListEmailsError::ValidationError)?;
        let status = request
            .status
            .as_deref()
            .map(EmailStatus::from_string)
            .transpose()
            .map_err(ListEmailsError::ValidationError)?;

        let emails = self
            .email_repository
            .find_all(status, request.skip, request.limit)
            .await?;
        let total_count = self.email_repository.count(status).await?;

        Ok(ListEmailsResponse {
            emails,
            total_count,
            skip: request.skip,
            limit: request.limit,
        })
    }
}
