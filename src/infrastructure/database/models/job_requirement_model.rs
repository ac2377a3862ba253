use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use super::json_list::{from_json_list, to_json_list};
use crate::domain::entities::{JobRequirement, NewJobRequirement};
use crate::domain::value_objects::JobStatus;
use crate::infrastructure::database::schema::job_requirements;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable)]
#[diesel(table_name = job_requirements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobRequirementModel {
    pub id: i32,
    pub title: String,
    pub client: String,
    pub client_contact: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub status: String,
    pub priority: String,
    pub location: Option<String>,
    pub job_type: String,
    pub duration: Option<String>,
    pub rate: Option<String>,
    pub rate_type: String,
    pub experience_years: i32,
    pub skills: serde_json::Value,
    pub description: String,
    pub requirements: serde_json::Value,
    pub nice_to_have: serde_json::Value,
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

#[derive(Debug, Insertable)]
#[diesel(table_name = job_requirements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewJobRequirementModel {
    pub title: String,
    pub client: String,
    pub client_contact: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub status: String,
    pub priority: String,
    pub location: Option<String>,
    pub job_type: String,
    pub duration: Option<String>,
    pub rate: Option<String>,
    pub rate_type: String,
    pub experience_years: i32,
    pub skills: serde_json::Value,
    pub description: String,
    pub requirements: serde_json::Value,
    pub nice_to_have: serde_json::Value,
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

impl From<NewJobRequirement> for NewJobRequirementModel {
    fn from(job: NewJobRequirement) -> Self {
        Self {
            status: job.status.as_str().to_string(),
            skills: to_json_list(&job.skills),
            requirements: to_json_list(&job.requirements),
            nice_to_have: to_json_list(&job.nice_to_have),
            title: job.title,
            client: job.client,
            client_contact: job.client_contact,
            client_email: job.client_email,
            client_phone: job.client_phone,
            priority: job.priority,
            location: job.location,
            job_type: job.job_type,
            duration: job.duration,
            rate: job.rate,
            rate_type: job.rate_type,
            experience_years: job.experience_years,
            description: job.description,
            source: job.source,
            ai_confidence: job.ai_confidence,
            submissions_count: job.submissions_count,
            matches_count: job.matches_count,
            views_count: job.views_count,
            recruiter_assigned: job.recruiter_assigned,
            urgency: job.urgency,
            client_rating: job.client_rating,
            budget: job.budget,
            start_date: job.start_date,
            created_at: job.created_at,
        }
    }
}

impl TryFrom<JobRequirementModel> for JobRequirement {
    type Error = String;

    fn try_from(model: JobRequirementModel) -> Result<Self, Self::Error> {
        Ok(JobRequirement {
            id: model.id,
            title: model.title,
            client: model.client,
            client_contact: model.client_contact,
            client_email: model.client_email,
            client_phone: model.client_phone,
            status: JobStatus::from_string(&model.status)?,
            priority: model.priority,
            location: model.location,
            job_type: model.job_type,
            duration: model.duration,
            rate: model.rate,
            rate_type: model.rate_type,
            experience_years: model.experience_years,
            skills: from_json_list(model.skills)?,
            description: model.description,
            requirements: from_json_list(model.requirements)?,
            nice_to_have: from_json_list(model.nice_to_have)?,
            source: model.source,
            ai_confidence: model.ai_confidence,
            submissions_count: model.submissions_count,
            matches_count: model.matches_count,
            views_count: model.views_count,
            recruiter_assigned: model.recruiter_assigned,
            urgency: model.urgency,
            client_rating: model.client_rating,
            budget: model.budget,
            start_date: model.start_date,
            created_at: model.created_at,
        })
    }
}
