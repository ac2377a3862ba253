use async_trait::async_trait;

use crate::domain::entities::MatchDetails;
use crate::domain::repositories::RepositoryError;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Newest first by creation time, ties by id.
    async fn find_recent_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError>;
    /// Active matches only, highest score first, ties by id.
    async fn find_top_active_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError>;
}
