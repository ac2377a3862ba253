use std::sync::Arc;

use crate::application::use_cases::pagination::query_limit;
use crate::domain::entities::MatchDetails;
use crate::domain::repositories::{MatchRepository, RepositoryError};

pub const TOP_SKILLS_COUNT: usize = 3;

#[derive(Debug)]
pub enum GetTopMatchesError {
    RepositoryError(String),
}

impl std::fmt::Display for GetTopMatchesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetTopMatchesError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetTopMatchesError {}

impl From<RepositoryError> for GetTopMatchesError {
    fn from(error: RepositoryError) -> Self {
        GetTopMatchesError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopMatch {
    pub consultant_name: String,
    pub job_title: String,
    pub score: i32,
    pub top_skills: Vec<String>,
    pub rate_display: String,
}

impl From<MatchDetails> for TopMatch {
    fn from(details: MatchDetails) -> Self {
        Self {
            top_skills: details.consultant.top_skills(TOP_SKILLS_COUNT),
            rate_display: details.consultant.rate_display(),
            consultant_name: details.consultant.name,
            job_title: details.job.title,
            score: details.job_match.match_score.value(),
        }
    }
}

pub struct GetTopMatchesUseCase {
    match_repository: Arc<dyn MatchRepository>,
    limit: usize,
}

impl GetTopMatchesUseCase {
    pub fn new(match_repository: Arc<dyn MatchRepository>, limit: usize) -> Self {
        Self {
            match_repository,
            limit,
        }
    }

    pub async fn execute(&self) -> Result<Vec<TopMatch>, GetTopMatchesError> {
        let matches = self
            .match_repository
            .find_top_active_with_details(query_limit(self.limit))
            .await?;

        Ok(matches
            .into_iter()
            .filter(|details| details.job_match.is_active)
            .take(self.limit)
            .map(TopMatch::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::JobStatus;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::test_support::{FailingStore, minutes_ago, new_consultant, new_job, new_match};

    async fn store_with_matches(scores: &[(i32, bool)]) -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        let consultant = store
            .add_consultant(new_consultant(
                "Alex Rodriguez",
                &["React", "Node.js", "AWS", "TypeScript", "GraphQL"],
                85.0,
                true,
            ))
            .await
            .unwrap();
        let job = store
            .add_job(new_job("Senior React Developer", "TechCorp Inc.", JobStatus::Active))
            .await
            .unwrap();

        for (i, (score, active)) in scores.iter().enumerate() {
            let draft = new_match(consultant.id, job.id, *score, *active, minutes_ago(i as i64));
            store.add_match(draft).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_projects_display_fields() {
        let store = store_with_matches(&[(95, true)]).await;
        let top = GetTopMatchesUseCase::new(store, 5).execute().await.unwrap();

        assert_eq!(
            top,
            vec![TopMatch {
                consultant_name: "Alex Rodriguez".to_string(),
                job_title: "Senior React Developer".to_string(),
                score: 95,
                top_skills: vec!["React".to_string(), "Node.js".to_string(), "AWS".to_string()],
                rate_display: "$85/hr".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_only_active_sorted_and_capped() {
        let store = store_with_matches(&[
            (70, true),
            (99, false),
            (88, true),
            (91, true),
            (60, true),
            (75, true),
            (82, true),
        ])
        .await;
        let top = GetTopMatchesUseCase::new(store, 5).execute().await.unwrap();

        let scores: Vec<i32> = top.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![91, 88, 82, 75, 70]);
    }

    #[tokio::test]
    async fn test_no_active_matches_is_empty() {
        let store = store_with_matches(&[(99, false)]).await;
        let top = GetTopMatchesUseCase::new(store, 5).execute().await.unwrap();

        assert!(top.is_empty());
    }

    #[tokio::test]
    async fn test_score_ties_are_deterministic() {
        let store = store_with_matches(&[(90, true), (90, true)]).await;
        let use_case = GetTopMatchesUseCase::new(store.clone(), 5);

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();
        assert_eq!(first, second);

        let ids: Vec<i32> = MatchRepository::find_top_active_with_details(store.as_ref(), 5)
            .await
            .unwrap()
            .iter()
            .map(|d| d.job_match.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let result = GetTopMatchesUseCase::new(Arc::new(FailingStore), 5)
            .execute()
            .await;

        assert!(matches!(result, Err(GetTopMatchesError::RepositoryError(_))));
    }
}
