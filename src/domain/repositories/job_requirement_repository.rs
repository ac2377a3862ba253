use async_trait::async_trait;

use crate::domain::entities::JobRequirement;
use crate::domain::repositories::RepositoryError;
use crate::domain::value_objects::JobStatus;

#[async_trait]
pub trait JobRequirementRepository: Send + Sync {
    /// Newest first, ties by id.
    async fn find_all(
        &self,
        status: Option<JobStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<JobRequirement>, RepositoryError>;
    async fn count(&self, status: Option<JobStatus>) -> Result<i64, RepositoryError>;
    /// Removes the job with its matches and submissions and detaches related emails.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
