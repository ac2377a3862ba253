use std::sync::Arc;

use crate::domain::repositories::{JobRequirementRepository, RepositoryError};

#[derive(Debug)]
pub enum RemoveJobRequirementError {
    JobRequirementNotFound(i32),
    RepositoryError(String),
}

impl std::fmt::Display for RemoveJobRequirementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveJobRequirementError::JobRequirementNotFound(id) => {
                write!(f, "Job requirement not found: {}", id)
            }
            RemoveJobRequirementError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for RemoveJobRequirementError {}

impl From<RepositoryError> for RemoveJobRequirementError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => RemoveJobRequirementError::JobRequirementNotFound(id),
            _ => RemoveJobRequirementError::RepositoryError(error.to_string()),
        }
    }
}

pub struct RemoveJobRequirementUseCase {
    job_requirement_repository: Arc<dyn JobRequirementRepository>,
}

impl RemoveJobRequirementUseCase {
    pub fn new(job_requirement_repository: Arc<dyn JobRequirementRepository>) -> Self {
        Self {
            job_requirement_repository,
        }
    }

    pub async fn execute(&self, job_id: i32) -> Result<(), RemoveJobRequirementError> {
        self.job_requirement_repository.delete(job_id).await?;

        tracing::info!(job_id, "removed job requirement and dependent records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::SubmissionRepository;
    use crate::domain::value_objects::JobStatus;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::test_support::{minutes_ago, new_consultant, new_job, new_submission, now};

    #[tokio::test]
    async fn test_removal_cascades_to_submissions() {
        let store = Arc::new(InMemoryStore::new());
        let consultant = store
            .add_consultant(new_consultant("Maria Chen", &["Kubernetes"], 90.0, true))
            .await
            .unwrap();
        let job = store
            .add_job(new_job("DevOps Engineer", "Innovate Solutions", JobStatus::Active))
            .await
            .unwrap();
        store
            .add_submission(new_submission(consultant.id, job.id, now()))
            .await
            .unwrap();

        RemoveJobRequirementUseCase::new(store.clone())
            .execute(job.id)
            .await
            .unwrap();

        let sent = store
            .count_sent_between(minutes_ago(60), now() + chrono::Duration::minutes(1))
            .await
            .unwrap();
        assert_eq!(sent, 0);
        assert!(!store.has_job(job.id).await);
    }

    #[tokio::test]
    async fn test_missing_job_is_not_found() {
        let result = RemoveJobRequirementUseCase::new(Arc::new(InMemoryStore::new()))
            .execute(3)
            .await;

        assert!(matches!(
            result,
            Err(RemoveJobRequirementError::JobRequirementNotFound(3))
        ));
    }
}
