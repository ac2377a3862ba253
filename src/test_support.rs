//! Builders shared by unit tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{
    Consultant, Email, JobRequirement, MatchDetails, NewConsultant, NewEmail, NewJobRequirement,
    NewMatch, NewSubmission, SubmissionDetails,
};
use crate::domain::repositories::{
    ConsultantRepository, EmailRepository, JobRequirementRepository, MatchRepository,
    RepositoryError, SeedBatch, SeedRepository, SubmissionRepository,
};
use crate::domain::value_objects::{EmailStatus, JobStatus, MatchScore};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap()
}

pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    now() - Duration::minutes(minutes)
}

pub fn new_consultant(name: &str, skills: &[&str], rate: f64, is_active: bool) -> NewConsultant {
    NewConsultant {
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_years: 5,
        location: None,
        rate,
        rate_type: "Hourly".to_string(),
        availability: "Available".to_string(),
        last_submitted: None,
        rating: 4.5,
        total_submissions: 0,
        is_active,
        created_at: now(),
    }
}

pub fn new_job(title: &str, client: &str, status: JobStatus) -> NewJobRequirement {
    NewJobRequirement {
        title: title.to_string(),
        client: client.to_string(),
        client_contact: None,
        client_email: None,
        client_phone: None,
        status,
        priority: "Medium".to_string(),
        location: Some("Remote".to_string()),
        job_type: "Contract".to_string(),
        duration: None,
        rate: None,
        rate_type: "Hourly".to_string(),
        experience_years: 3,
        skills: vec![],
        description: format!("{} at {}", title, client),
        requirements: vec![],
        nice_to_have: vec![],
        source: None,
        ai_confidence: 80,
        submissions_count: 0,
        matches_count: 0,
        views_count: 0,
        recruiter_assigned: None,
        urgency: None,
        client_rating: None,
        budget: None,
        start_date: None,
        created_at: now(),
    }
}

pub fn new_email(from_name: &str, status: EmailStatus, timestamp: DateTime<Utc>) -> NewEmail {
    NewEmail {
        from_address: "hiring@client.com".to_string(),
        from_name: from_name.to_string(),
        subject: "Open position".to_string(),
        preview: String::new(),
        body: String::new(),
        timestamp,
        is_read: false,
        status,
        priority: "Medium".to_string(),
        ai_confidence: 85,
        has_attachment: false,
        category: Some("job_requirement".to_string()),
        related_job_id: None,
    }
}

pub fn new_match(
    consultant_id: i32,
    job_id: i32,
    score: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
) -> NewMatch {
    NewMatch {
        consultant_id,
        job_id,
        match_score: MatchScore::new(score).unwrap(),
        is_active,
        key_strengths: vec![],
        concerns: vec![],
        created_at,
    }
}

pub fn new_submission(consultant_id: i32, job_id: i32, sent_at: DateTime<Utc>) -> NewSubmission {
    NewSubmission {
        consultant_id,
        job_id,
        sent_at,
    }
}

/// Store whose every call fails as if the database connection dropped.
pub struct FailingStore;

fn connection_reset<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::DatabaseError("connection reset".to_string()))
}

#[async_trait]
impl ConsultantRepository for FailingStore {
    async fn find_all(&self, _: bool, _: i64, _: i64) -> Result<Vec<Consultant>, RepositoryError> {
        connection_reset()
    }

    async fn count(&self, _: bool) -> Result<i64, RepositoryError> {
        connection_reset()
    }

    async fn delete(&self, _: i32) -> Result<(), RepositoryError> {
        connection_reset()
    }
}

#[async_trait]
impl JobRequirementRepository for FailingStore {
    async fn find_all(
        &self,
        _: Option<JobStatus>,
        _: i64,
        _: i64,
    ) -> Result<Vec<JobRequirement>, RepositoryError> {
        connection_reset()
    }

    async fn count(&self, _: Option<JobStatus>) -> Result<i64, RepositoryError> {
        connection_reset()
    }

    async fn delete(&self, _: i32) -> Result<(), RepositoryError> {
        connection_reset()
    }
}

#[async_trait]
impl EmailRepository for FailingStore {
    async fn find_all(
        &self,
        _: Option<EmailStatus>,
        _: i64,
        _: i64,
    ) -> Result<Vec<Email>, RepositoryError> {
        connection_reset()
    }

    async fn count(&self, _: Option<EmailStatus>) -> Result<i64, RepositoryError> {
        connection_reset()
    }
}

#[async_trait]
impl MatchRepository for FailingStore {
    async fn find_recent_with_details(&self, _: i64) -> Result<Vec<MatchDetails>, RepositoryError> {
        connection_reset()
    }

    async fn find_top_active_with_details(
        &self,
        _: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError> {
        connection_reset()
    }
}

#[async_trait]
impl SubmissionRepository for FailingStore {
    async fn count_sent_between(
        &self,
        _: DateTime<Utc>,
        _: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        connection_reset()
    }

    async fn find_recent_with_details(
        &self,
        _: i64,
    ) -> Result<Vec<SubmissionDetails>, RepositoryError> {
        connection_reset()
    }
}

#[async_trait]
impl SeedRepository for FailingStore {
    async fn load_if_empty(&self, _: SeedBatch) -> Result<bool, RepositoryError> {
        connection_reset()
    }
}
