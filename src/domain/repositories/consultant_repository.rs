use async_trait::async_trait;

use crate::domain::entities::Consultant;
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait ConsultantRepository: Send + Sync {
    /// Ordered by name, then id.
    async fn find_all(
        &self,
        active_only: bool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Consultant>, RepositoryError>;
    async fn count(&self, active_only: bool) -> Result<i64, RepositoryError>;
    /// Removes the consultant together with its matches and submissions.
    /// Fails with [`RepositoryError::NotFound`] for an unknown id.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
