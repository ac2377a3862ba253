use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::JobStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: i32,
    pub title: String,
    pub client: String,
    pub client_contact: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub status: JobStatus,
    pub priority: String,
    pub location: Option<String>,
    pub job_type: String,
    pub duration: Option<String>,
    pub rate: Option<String>,
    pub rate_type: String,
    pub experience_years: i32,
    pub skills: Vec<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub source: Option<String>,
    pub ai_confidence: i32,
    pub submissions_count: i32,
    pub matches_count: i32,
    pub views_count: i32,
    pub recruiter_assigned: Option<String>,
    pub urgency: Option<String>,
    pub client_rating: Option<f64>,
    pub budget: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJobRequirement {
    pub title: String,
    pub client: String,
    pub client_contact: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub status: JobStatus,
    pub priority: String,
    pub location: Option<String>,
    pub job_type: String,
    pub duration: Option<String>,
    pub rate: Option<String>,
    pub rate_type: String,
    pub experience_years: i32,
    pub skills: Vec<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub source: Option<String>,
    pub ai_confidence: i32,
    pub submissions_count: i32,
    pub matches_count: i32,
    pub views_count: i32,
    pub recruiter_assigned: Option<String>,
    pub urgency: Option<String>,
    pub client_rating: Option<f64>,
    pub budget: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NewJobRequirement {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Job title cannot be empty".to_string());
        }

        if self.submissions_count < 0 || self.matches_count < 0 || self.views_count < 0 {
            return Err("Job counters cannot be negative".to_string());
        }

        if !(0..=100).contains(&self.ai_confidence) {
            return Err(format!(
                "AI confidence must be between 0 and 100, got {}",
                self.ai_confidence
            ));
        }

        Ok(())
    }

    pub fn with_id(self, id: i32) -> JobRequirement {
        JobRequirement {
            id,
            title: self.title,
            client: self.client,
            client_contact: self.client_contact,
            client_email: self.client_email,
            client_phone: self.client_phone,
            status: self.status,
            priority: self.priority,
            location: self.location,
            job_type: self.job_type,
            duration: self.duration,
            rate: self.rate,
            rate_type: self.rate_type,
            experience_years: self.experience_years,
            skills: self.skills,
            description: self.description,
            requirements: self.requirements,
            nice_to_have: self.nice_to_have,
            source: self.source,
            ai_confidence: self.ai_confidence,
            submissions_count: self.submissions_count,
            matches_count: self.matches_count,
            views_count: self.views_count,
            recruiter_assigned: self.recruiter_assigned,
            urgency: self.urgency,
            client_rating: self.client_rating,
            budget: self.budget,
            start_date: self.start_date,
            created_at: self.created_at,
        }
    }
}
