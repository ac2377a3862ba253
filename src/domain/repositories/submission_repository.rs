use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::SubmissionDetails;
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Counts submissions with `start <= sent_at < end`.
    async fn count_sent_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, RepositoryError>;
    /// Most recently sent first, ties by id.
    async fn find_recent_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<SubmissionDetails>, RepositoryError>;
}
