use futures::try_join;
use std::sync::Arc;

use crate::application::ports::Clock;
use crate::domain::repositories::{
    ConsultantRepository, EmailRepository, JobRequirementRepository, RepositoryError,
    SubmissionRepository,
};
use crate::domain::value_objects::{EmailStatus, JobStatus};

#[derive(Debug)]
pub enum GetDashboardStatsError {
    RepositoryError(String),
}

impl std::fmt::Display for GetDashboardStatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetDashboardStatsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetDashboardStatsError {}

impl From<RepositoryError> for GetDashboardStatsError {
    fn from(error: RepositoryError) -> Self {
        GetDashboardStatsError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub new_emails: i64,
    pub active_consultants: i64,
    pub active_job_requirements: i64,
    pub submissions_today: i64,
}

pub struct GetDashboardStatsUseCase {
    email_repository: Arc<dyn EmailRepository>,
    consultant_repository: Arc<dyn ConsultantRepository>,
    job_requirement_repository: Arc<dyn JobRequirementRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
    clock: Arc<dyn Clock>,
}

impl GetDashboardStatsUseCase {
    pub fn new(
        email_repository: Arc<dyn EmailRepository>,
        consultant_repository: Arc<dyn ConsultantRepository>,
        job_requirement_repository: Arc<dyn JobRequirementRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            email_repository,
            consultant_repository,
            job_requirement_repository,
            submission_repository,
            clock,
        }
    }

    pub async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        let (today_start, tomorrow_start) = self.clock.today_bounds();

        let (new_emails, active_consultants, active_job_requirements, submissions_today) = try_join!(
            self.email_repository.count(Some(EmailStatus::New)),
            self.consultant_repository.count(true),
            self.job_requirement_repository.count(Some(JobStatus::Active)),
            self.submission_repository
                .count_sent_between(today_start, tomorrow_start),
        )?;

        tracing::debug!(
            new_emails,
            active_consultants,
            active_job_requirements,
            submissions_today,
            "computed dashboard stats"
        );

        Ok(DashboardStats {
            new_emails,
            active_consultants,
            active_job_requirements,
            submissions_today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::clock::FixedClock;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::test_support::{
        FailingStore, minutes_ago, new_consultant, new_email, new_job, new_submission, now,
    };
    use chrono::Duration;

    fn use_case(store: Arc<InMemoryStore>) -> GetDashboardStatsUseCase {
        GetDashboardStatsUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            Arc::new(FixedClock(now())),
        )
    }

    #[tokio::test]
    async fn test_empty_store_counts_zero() {
        let stats = use_case(Arc::new(InMemoryStore::new())).execute().await.unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                new_emails: 0,
                active_consultants: 0,
                active_job_requirements: 0,
                submissions_today: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_counts_filtered_sets() {
        let store = Arc::new(InMemoryStore::new());

        for (name, status, sent) in [
            ("A", EmailStatus::New, minutes_ago(120)),
            ("B", EmailStatus::New, minutes_ago(180)),
            ("C", EmailStatus::Processed, now()),
        ] {
            store.add_email(new_email(name, status, sent)).await.unwrap();
        }

        let mut consultant_ids = Vec::new();
        for (name, active) in [("Alex", true), ("Maria", true), ("David", true), ("Sam", false)] {
            let draft = new_consultant(name, &[], 80.0, active);
            consultant_ids.push(store.add_consultant(draft).await.unwrap().id);
        }

        let mut job_ids = Vec::new();
        for status in [JobStatus::Active, JobStatus::Active, JobStatus::Filled] {
            let draft = new_job("Role", "Client", status);
            job_ids.push(store.add_job(draft).await.unwrap().id);
        }

        // One today, one yesterday.
        for (index, sent_at) in [(0, now() - Duration::hours(1)), (1, now() - Duration::days(1))] {
            store
                .add_submission(new_submission(consultant_ids[index], job_ids[index], sent_at))
                .await
                .unwrap();
        }

        let stats = use_case(store).execute().await.unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                new_emails: 2,
                active_consultants: 3,
                active_job_requirements: 2,
                submissions_today: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let store = Arc::new(InMemoryStore::new());
        store
            .add_email(new_email("A", EmailStatus::New, now()))
            .await
            .unwrap();
        let use_case = use_case(store);

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_store_failure_yields_no_partial_stats() {
        let healthy = Arc::new(InMemoryStore::new());
        // Only the submission count fails; the other three would succeed.
        let use_case = GetDashboardStatsUseCase::new(
            healthy.clone(),
            healthy.clone(),
            healthy,
            Arc::new(FailingStore),
            Arc::new(FixedClock(now())),
        );

        let result = use_case.execute().await;
        assert!(matches!(
            result,
            Err(GetDashboardStatsError::RepositoryError(msg)) if msg.contains("connection reset")
        ));
    }
}
