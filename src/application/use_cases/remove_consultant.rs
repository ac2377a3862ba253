use std::sync::Arc;

use crate::domain::repositories::{ConsultantRepository, RepositoryError};

#[derive(Debug)]
pub enum RemoveConsultantError {
    ConsultantNotFound(i32),
    RepositoryError(String),
}

impl std::fmt::Display for RemoveConsultantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveConsultantError::ConsultantNotFound(id) => {
                write!(f, "Consultant not found: {}", id)
            }
            RemoveConsultantError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RemoveConsultantError {}

impl From<RepositoryError> for RemoveConsultantError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => RemoveConsultantError::ConsultantNotFound(id),
            _ => RemoveConsultantError::RepositoryError(error.to_string()),
        }
    }
}

pub struct RemoveConsultantUseCase {
    consultant_repository: Arc<dyn ConsultantRepository>,
}

impl RemoveConsultantUseCase {
    pub fn new(consultant_repository: Arc<dyn ConsultantRepository>) -> Self {
        Self {
            consultant_repository,
        }
    }

    /// Deletes the consultant; its matches and submissions go with it.
    pub async fn execute(&self, consultant_id: i32) -> Result<(), RemoveConsultantError> {
        self.consultant_repository.delete(consultant_id).await?;

        tracing::info!(consultant_id, "removed consultant and dependent records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MatchRepository;
    use crate::domain::value_objects::JobStatus;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::test_support::{FailingStore, new_consultant, new_job, new_match, now};

    #[tokio::test]
    async fn test_removal_cascades_to_matches() {
        let store = Arc::new(InMemoryStore::new());
        let consultant = store
            .add_consultant(new_consultant("David Kim", &["Python"], 95.0, true))
            .await
            .unwrap();
        let job = store
            .add_job(new_job("ML Engineer", "DataWorks", JobStatus::Active))
            .await
            .unwrap();
        store
            .add_match(new_match(consultant.id, job.id, 88, true, now()))
            .await
            .unwrap();

        RemoveConsultantUseCase::new(store.clone())
            .execute(consultant.id)
            .await
            .unwrap();

        let matches = MatchRepository::find_recent_with_details(store.as_ref(), 10)
            .await
            .unwrap();
        assert!(matches.is_empty());
        assert!(!store.has_consultant(consultant.id).await);
    }

    #[tokio::test]
    async fn test_missing_consultant_is_not_found() {
        let result = RemoveConsultantUseCase::new(Arc::new(InMemoryStore::new()))
            .execute(7)
            .await;

        assert!(matches!(result, Err(RemoveConsultantError::ConsultantNotFound(7))));
    }

    #[tokio::test]
    async fn test_store_failure_is_not_reported_as_missing() {
        let result = RemoveConsultantUseCase::new(Arc::new(FailingStore))
            .execute(7)
            .await;

        assert!(matches!(result, Err(RemoveConsultantError::RepositoryError(_))));
    }
}
