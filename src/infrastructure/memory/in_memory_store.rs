use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[cfg(test)]
use crate::domain::entities::{NewMatch, NewSubmission};
use crate::domain::entities::{
    Consultant, Email, JobRequirement, Match, MatchDetails, NewConsultant, NewEmail,
    NewJobRequirement, Submission, SubmissionDetails,
};
use crate::domain::repositories::{
    ConsultantRepository, EmailRepository, JobRequirementRepository, MatchRepository,
    RepositoryError, SeedBatch, SeedRepository, SubmissionRepository,
};
use crate::domain::value_objects::{EmailStatus, JobStatus};

/// Process-local store implementing every repository. Referential rules that
/// Postgres enforces with foreign keys are applied here by hand.
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

#[derive(Clone, Default)]
struct StoreState {
    consultants: BTreeMap<i32, Consultant>,
    jobs: BTreeMap<i32, JobRequirement>,
    emails: BTreeMap<i32, Email>,
    matches: BTreeMap<i32, Match>,
    submissions: BTreeMap<i32, Submission>,
    sequences: Sequences,
}

// Ids are never reused, matching serial columns.
#[derive(Clone, Default)]
struct Sequences {
    consultant: i32,
    job: i32,
    email: i32,
    job_match: i32,
    submission: i32,
}

fn next_id(sequence: &mut i32) -> i32 {
    *sequence += 1;
    *sequence
}

fn page<T>(items: Vec<T>, skip: i64, limit: i64) -> Vec<T> {
    items
        .into_iter()
        .skip(usize::try_from(skip).unwrap_or(0))
        .take(usize::try_from(limit).unwrap_or(0))
        .collect()
}

impl StoreState {
    fn insert_consultant(
        &mut self,
        consultant: NewConsultant,
    ) -> Result<Consultant, RepositoryError> {
        consultant.validate().map_err(RepositoryError::ValidationError)?;
        if self
            .consultants
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&consultant.email))
        {
            return Err(RepositoryError::ValidationError(format!(
                "Consultant email already exists: {}",
                consultant.email
            )));
        }

        let id = next_id(&mut self.sequences.consultant);
        let consultant = consultant.with_id(id);
        self.consultants.insert(id, consultant.clone());
        Ok(consultant)
    }

    fn insert_job(&mut self, job: NewJobRequirement) -> Result<JobRequirement, RepositoryError> {
        job.validate().map_err(RepositoryError::ValidationError)?;

        let id = next_id(&mut self.sequences.job);
        let job = job.with_id(id);
        self.jobs.insert(id, job.clone());
        Ok(job)
    }

    fn insert_email(&mut self, email: NewEmail) -> Result<Email, RepositoryError> {
        if let Some(job_id) = email.related_job_id {
            if !self.jobs.contains_key(&job_id) {
                return Err(RepositoryError::ValidationError(format!(
                    "Unknown job requirement: {}",
                    job_id
                )));
            }
        }

        let id = next_id(&mut self.sequences.email);
        let email = email.with_id(id);
        self.emails.insert(id, email.clone());
        Ok(email)
    }

    fn apply_seed(&mut self, batch: SeedBatch) -> Result<(), RepositoryError> {
        for consultant in batch.consultants {
            self.insert_consultant(consultant)?;
        }

        let mut job_ids = Vec::with_capacity(batch.job_requirements.len());
        for job in batch.job_requirements {
            job_ids.push(self.insert_job(job)?.id);
        }

        for email in batch.emails {
            self.insert_email(email.resolve(&job_ids)?)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn insert_match(&mut self, job_match: NewMatch) -> Result<Match, RepositoryError> {
        self.require_parties(job_match.consultant_id, job_match.job_id)?;

        let id = next_id(&mut self.sequences.job_match);
        let job_match = job_match.with_id(id);
        self.matches.insert(id, job_match.clone());
        Ok(job_match)
    }

    #[cfg(test)]
    fn insert_submission(
        &mut self,
        submission: NewSubmission,
    ) -> Result<Submission, RepositoryError> {
        self.require_parties(submission.consultant_id, submission.job_id)?;

        let id = next_id(&mut self.sequences.submission);
        let submission = submission.with_id(id);
        self.submissions.insert(id, submission.clone());
        Ok(submission)
    }

    #[cfg(test)]
    fn require_parties(&self, consultant_id: i32, job_id: i32) -> Result<(), RepositoryError> {
        if !self.consultants.contains_key(&consultant_id) {
            return Err(RepositoryError::ValidationError(format!(
                "Unknown consultant: {}",
                consultant_id
            )));
        }

        if !self.jobs.contains_key(&job_id) {
            return Err(RepositoryError::ValidationError(format!(
                "Unknown job requirement: {}",
                job_id
            )));
        }

        Ok(())
    }

    fn parties(&self, consultant_id: i32, job_id: i32) -> Option<(Consultant, JobRequirement)> {
        let consultant = self.consultants.get(&consultant_id)?;
        let job = self.jobs.get(&job_id)?;
        Some((consultant.clone(), job.clone()))
    }

    fn match_details(&self, job_match: &Match) -> Option<MatchDetails> {
        let (consultant, job) = self.parties(job_match.consultant_id, job_match.job_id)?;
        Some(MatchDetails {
            job_match: job_match.clone(),
            consultant,
            job,
        })
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl InMemoryStore {
    pub async fn add_consultant(
        &self,
        draft: NewConsultant,
    ) -> Result<Consultant, RepositoryError> {
        self.state.write().await.insert_consultant(draft)
    }

    pub async fn add_job(
        &self,
        draft: NewJobRequirement,
    ) -> Result<JobRequirement, RepositoryError> {
        self.state.write().await.insert_job(draft)
    }

    pub async fn add_email(&self, draft: NewEmail) -> Result<Email, RepositoryError> {
        self.state.write().await.insert_email(draft)
    }

    pub async fn add_match(&self, draft: NewMatch) -> Result<Match, RepositoryError> {
        self.state.write().await.insert_match(draft)
    }

    pub async fn add_submission(
        &self,
        draft: NewSubmission,
    ) -> Result<Submission, RepositoryError> {
        self.state.write().await.insert_submission(draft)
    }

    pub async fn has_job(&self, id: i32) -> bool {
        self.state.read().await.jobs.contains_key(&id)
    }

    pub async fn has_consultant(&self, id: i32) -> bool {
        self.state.read().await.consultants.contains_key(&id)
    }
}

#[async_trait]
impl ConsultantRepository for InMemoryStore {
    async fn find_all(
        &self,
        active_only: bool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Consultant>, RepositoryError> {
        let state = self.state.read().await;
        let mut consultants: Vec<Consultant> = state
            .consultants
            .values()
            .filter(|c| !active_only || c.is_active)
            .cloned()
            .collect();
        consultants.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(page(consultants, skip, limit))
    }

    async fn count(&self, active_only: bool) -> Result<i64, RepositoryError> {
        let state = self.state.read().await;
        let count = state
            .consultants
            .values()
            .filter(|c| !active_only || c.is_active)
            .count();
        Ok(count as i64)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.consultants.remove(&id).is_none() {
            return Err(RepositoryError::NotFound(id));
        }

        state.matches.retain(|_, m| m.consultant_id != id);
        state.submissions.retain(|_, s| s.consultant_id != id);
        Ok(())
    }
}

#[async_trait]
impl JobRequirementRepository for InMemoryStore {
    async fn find_all(
        &self,
        status: Option<JobStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<JobRequirement>, RepositoryError> {
        let state = self.state.read().await;
        let mut jobs: Vec<JobRequirement> = state
            .jobs
            .values()
            .filter(|j| status.is_none_or(|s| j.status == s))
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        Ok(page(jobs, skip, limit))
    }

    async fn count(&self, status: Option<JobStatus>) -> Result<i64, RepositoryError> {
        let state = self.state.read().await;
        let count = state
            .jobs
            .values()
            .filter(|j| status.is_none_or(|s| j.status == s))
            .count();
        Ok(count as i64)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.jobs.remove(&id).is_none() {
            return Err(RepositoryError::NotFound(id));
        }

        state.matches.retain(|_, m| m.job_id != id);
        state.submissions.retain(|_, s| s.job_id != id);
        for email in state.emails.values_mut() {
            if email.related_job_id == Some(id) {
                email.related_job_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EmailRepository for InMemoryStore {
    async fn find_all(
        &self,
        status: Option<EmailStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Email>, RepositoryError> {
        let state = self.state.read().await;
        let mut emails: Vec<Email> = state
            .emails
            .values()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .cloned()
            .collect();
        emails.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));

        Ok(page(emails, skip, limit))
    }

    async fn count(&self, status: Option<EmailStatus>) -> Result<i64, RepositoryError> {
        let state = self.state.read().await;
        let count = state
            .emails
            .values()
            .filter(|e| status.is_none_or(|s| e.status == s))
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl MatchRepository for InMemoryStore {
    async fn find_recent_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError> {
        let state = self.state.read().await;
        let mut matches: Vec<&Match> = state.matches.values().collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let details = matches
            .into_iter()
            .filter_map(|m| state.match_details(m))
            .collect();
        Ok(page(details, 0, limit))
    }

    async fn find_top_active_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError> {
        let state = self.state.read().await;
        let mut matches: Vec<&Match> = state.matches.values().filter(|m| m.is_active).collect();
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score).then(a.id.cmp(&b.id)));

        let details = matches
            .into_iter()
            .filter_map(|m| state.match_details(m))
            .collect();
        Ok(page(details, 0, limit))
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryStore {
    async fn count_sent_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        let state = self.state.read().await;
        let count = state
            .submissions
            .values()
            .filter(|s| s.was_sent_within(start, end))
            .count();
        Ok(count as i64)
    }

    async fn find_recent_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<SubmissionDetails>, RepositoryError> {
        let state = self.state.read().await;
        let mut submissions: Vec<&Submission> = state.submissions.values().collect();
        submissions.sort_by(|a, b| b.sent_at.cmp(&a.sent_at).then(a.id.cmp(&b.id)));

        let details = submissions
            .into_iter()
            .filter_map(|s| {
                let (consultant, job) = state.parties(s.consultant_id, s.job_id)?;
                Some(SubmissionDetails {
                    submission: s.clone(),
                    consultant,
                    job,
                })
            })
            .collect();
        Ok(page(details, 0, limit))
    }
}

#[async_trait]
impl SeedRepository for InMemoryStore {
    async fn load_if_empty(&self, batch: SeedBatch) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.consultants.is_empty() {
            return Ok(false);
        }

        // staged on a copy so a failing row leaves the store untouched
        let mut staged = state.clone();
        staged.apply_seed(batch)?;
        *state = staged;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::SeedEmail;
    use crate::test_support::{
        minutes_ago, new_consultant, new_email, new_job, new_match, new_submission, now,
    };

    async fn store_with_pair() -> (InMemoryStore, Consultant, JobRequirement) {
        let store = InMemoryStore::new();
        let consultant = store
            .add_consultant(new_consultant("Alex Rodriguez", &["React"], 85.0, true))
            .await
            .unwrap();
        let job = store
            .add_job(new_job("Senior React Developer", "TechCorp Inc.", JobStatus::Active))
            .await
            .unwrap();
        (store, consultant, job)
    }

    #[tokio::test]
    async fn test_deleting_consultant_cascades() {
        let (store, consultant, job) = store_with_pair().await;
        store
            .add_match(new_match(consultant.id, job.id, 90, true, now()))
            .await
            .unwrap();
        store
            .add_submission(new_submission(consultant.id, job.id, now()))
            .await
            .unwrap();

        ConsultantRepository::delete(&store, consultant.id).await.unwrap();

        let matches = MatchRepository::find_recent_with_details(&store, 10).await.unwrap();
        assert!(matches.is_empty());
        let (start, end) = (minutes_ago(60), now() + chrono::Duration::minutes(1));
        assert_eq!(store.count_sent_between(start, end).await.unwrap(), 0);
        // The job itself survives.
        assert!(store.has_job(job.id).await);
    }

    #[tokio::test]
    async fn test_deleting_job_cascades_and_detaches_emails() {
        let (store, consultant, job) = store_with_pair().await;
        store
            .add_match(new_match(consultant.id, job.id, 75, true, now()))
            .await
            .unwrap();
        let mut email = new_email("Sarah Johnson - TechCorp", EmailStatus::New, now());
        email.related_job_id = Some(job.id);
        store.add_email(email).await.unwrap();

        JobRequirementRepository::delete(&store, job.id).await.unwrap();

        assert!(store.find_top_active_with_details(5).await.unwrap().is_empty());
        let emails = EmailRepository::find_all(&store, None, 0, 10).await.unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].related_job_id, None);
        assert!(store.has_consultant(consultant.id).await);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = InMemoryStore::new();
        assert_eq!(
            ConsultantRepository::delete(&store, 42).await,
            Err(RepositoryError::NotFound(42))
        );
        assert_eq!(
            JobRequirementRepository::delete(&store, 42).await,
            Err(RepositoryError::NotFound(42))
        );
    }

    #[tokio::test]
    async fn test_match_requires_both_endpoints() {
        let (store, consultant, job) = store_with_pair().await;

        let orphan = store
            .add_match(new_match(consultant.id, 999, 80, true, now()))
            .await;
        assert!(matches!(orphan, Err(RepositoryError::ValidationError(_))));

        let orphan = store.add_submission(new_submission(999, job.id, now())).await;
        assert!(matches!(orphan, Err(RepositoryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_duplicate_consultant_email_rejected() {
        let (store, _, _) = store_with_pair().await;
        let duplicate = store
            .add_consultant(new_consultant("Alex Rodriguez", &[], 70.0, true))
            .await;

        assert!(matches!(duplicate, Err(RepositoryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_top_matches_break_score_ties_by_id() {
        let (store, consultant, job) = store_with_pair().await;
        for (score, age) in [(90, 5), (95, 1), (90, 0)] {
            let draft = new_match(consultant.id, job.id, score, true, minutes_ago(age));
            store.add_match(draft).await.unwrap();
        }
        store
            .add_match(new_match(consultant.id, job.id, 99, false, now()))
            .await
            .unwrap();

        let top = store.find_top_active_with_details(5).await.unwrap();
        let ids: Vec<i32> = top.iter().map(|d| d.job_match.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_email_listing_filters_and_pages() {
        let store = InMemoryStore::new();
        for (age, status) in [
            (10, EmailStatus::New),
            (5, EmailStatus::Processed),
            (1, EmailStatus::New),
        ] {
            store
                .add_email(new_email("Sender", status, minutes_ago(age)))
                .await
                .unwrap();
        }

        let new_emails = EmailRepository::find_all(&store, Some(EmailStatus::New), 0, 10)
            .await
            .unwrap();
        let ids: Vec<i32> = new_emails.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1]);

        let second_page = EmailRepository::find_all(&store, None, 1, 1).await.unwrap();
        assert_eq!(second_page[0].id, 2);
        assert_eq!(EmailRepository::count(&store, Some(EmailStatus::New)).await.unwrap(), 2);
    }

    fn small_batch() -> SeedBatch {
        SeedBatch {
            consultants: vec![new_consultant("Maria Chen", &["Docker"], 90.0, true)],
            job_requirements: vec![new_job(
                "DevOps Engineer",
                "Innovate Solutions",
                JobStatus::Active,
            )],
            emails: vec![SeedEmail {
                email: new_email("Mike Chen - Innovate Solutions", EmailStatus::New, now()),
                job_index: Some(0),
            }],
        }
    }

    #[tokio::test]
    async fn test_seed_batch_links_emails_to_inserted_jobs() {
        let store = InMemoryStore::new();

        assert!(store.load_if_empty(small_batch()).await.unwrap());

        let jobs = JobRequirementRepository::find_all(&store, None, 0, 10).await.unwrap();
        let emails = EmailRepository::find_all(&store, None, 0, 10).await.unwrap();
        assert_eq!(emails[0].related_job_id, Some(jobs[0].id));
    }

    #[tokio::test]
    async fn test_failed_seed_batch_writes_nothing() {
        let store = InMemoryStore::new();
        let mut batch = small_batch();
        batch.emails.push(SeedEmail {
            email: new_email("Unlinked", EmailStatus::New, now()),
            job_index: Some(3),
        });

        let result = store.load_if_empty(batch).await;
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));

        assert_eq!(ConsultantRepository::count(&store, false).await.unwrap(), 0);
        assert_eq!(JobRequirementRepository::count(&store, None).await.unwrap(), 0);
        assert_eq!(EmailRepository::count(&store, None).await.unwrap(), 0);
        // Sequences roll back with the rows.
        let consultant = store
            .add_consultant(new_consultant("David Kim", &[], 95.0, true))
            .await
            .unwrap();
        assert_eq!(consultant.id, 1);
    }

    #[tokio::test]
    async fn test_seed_batch_skipped_when_populated() {
        let (store, _, _) = store_with_pair().await;

        assert!(!store.load_if_empty(small_batch()).await.unwrap());
        assert_eq!(ConsultantRepository::count(&store, false).await.unwrap(), 1);
        assert_eq!(EmailRepository::count(&store, None).await.unwrap(), 0);
    }
}
