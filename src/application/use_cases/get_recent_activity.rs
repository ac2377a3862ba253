use futures::try_join;
use std::sync::Arc;

use crate::application::services::activity_feed::{ActivityItem, ActivityLimits, merge_activity};
use crate::application::use_cases::pagination::query_limit;
use crate::domain::repositories::{
    EmailRepository, MatchRepository, RepositoryError, SubmissionRepository,
};
use crate::domain::value_objects::EmailStatus;

#[derive(Debug)]
pub enum GetRecentActivityError {
    RepositoryError(String),
}

impl std::fmt::Display for GetRecentActivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetRecentActivityError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetRecentActivityError {}

impl From<RepositoryError> for GetRecentActivityError {
    fn from(error: RepositoryError) -> Self {
        GetRecentActivityError::RepositoryError(error.to_string())
    }
}

pub struct GetRecentActivityUseCase {
    email_repository: Arc<dyn EmailRepository>,
    match_repository: Arc<dyn MatchRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
    limits: ActivityLimits,
}

impl GetRecentActivityUseCase {
    pub fn new(
        email_repository: Arc<dyn EmailRepository>,
        match_repository: Arc<dyn MatchRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
        limits: ActivityLimits,
    ) -> Self {
        Self {
            email_repository,
            match_repository,
            submission_repository,
            limits,
        }
    }

    pub async fn execute(&self) -> Result<Vec<ActivityItem>, GetRecentActivityError> {
        let (emails, matches, submissions) = try_join!(
            self.email_repository
                .find_all(Some(EmailStatus::New), 0, query_limit(self.limits.emails)),
            self.match_repository
                .find_recent_with_details(query_limit(self.limits.matches)),
            self.submission_repository
                .find_recent_with_details(query_limit(self.limits.submissions)),
        )?;

        let feed = merge_activity(&emails, &matches, &submissions, &self.limits);
        tracing::debug!(
            emails = emails.len(),
            matches = matches.len(),
            submissions = submissions.len(),
            items = feed.len(),
            "merged recent activity"
        );

        Ok(feed)
    }
}
