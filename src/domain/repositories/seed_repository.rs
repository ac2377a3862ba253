use async_trait::async_trait;

use crate::domain::entities::{NewConsultant, NewEmail, NewJobRequirement};
use crate::domain::repositories::RepositoryError;

/// An email fixture whose job link is resolved once the jobs are inserted.
#[derive(Debug, Clone)]
pub struct SeedEmail {
    pub email: NewEmail,
    /// Position in [`SeedBatch::job_requirements`].
    pub job_index: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SeedBatch {
    pub consultants: Vec<NewConsultant>,
    pub job_requirements: Vec<NewJobRequirement>,
    pub emails: Vec<SeedEmail>,
}

impl SeedEmail {
    /// Maps `job_index` onto the ids the store assigned to the batch's jobs.
    pub fn resolve(self, job_ids: &[i32]) -> Result<NewEmail, RepositoryError> {
        let mut email = self.email;
        email.related_job_id = match self.job_index {
            Some(index) => Some(job_ids.get(index).copied().ok_or_else(|| {
                RepositoryError::ValidationError(format!(
                    "Seed email refers to job #{} but the batch has {} job(s)",
                    index,
                    job_ids.len()
                ))
            })?),
            None => None,
        };
        Ok(email)
    }
}

#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Inserts the whole batch in one unit of work when no consultant exists.
    ///
    /// Returns `Ok(false)` without writing when the store is already
    /// populated. On error nothing from the batch is kept.
    async fn load_if_empty(&self, batch: SeedBatch) -> Result<bool, RepositoryError>;
}
