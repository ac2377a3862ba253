use async_trait::async_trait;

use crate::domain::entities::Email;
use crate::domain::repositories::RepositoryError;
use crate::domain::value_objects::EmailStatus;

#[async_trait]
pub trait EmailRepository: Send + Sync {
    /// Most recent first, ties by id.
    async fn find_all(
        &self,
        status: Option<EmailStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Email>, RepositoryError>;
    async fn count(&self, status: Option<EmailStatus>) -> Result<i64, RepositoryError>;
}
