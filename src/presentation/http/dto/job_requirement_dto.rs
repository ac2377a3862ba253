use serde::{Deserialize, Serialize};

use super::{PaginationMetaDto, default_limit};
use crate::domain::entities::JobRequirement;

#[derive(Debug, Deserialize)]
pub struct JobRequirementQueryDto {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirementResponseDto {
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
    pub experience: i32,
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
    pub start_date: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirementListResponseDto {
    pub job_requirements: Vec<JobRequirementResponseDto>,
    pub meta: PaginationMetaDto,
}

impl From<JobRequirement> for JobRequirementResponseDto {
    fn from(job: JobRequirement) -> Self {
        Self {
            id: job.id,
            title: job.title,
            client: job.client,
            client_contact: job.client_contact,
            client_email: job.client_email,
            client_phone: job.client_phone,
            status: job.status.to_string(),
            priority: job.priority,
            location: job.location,
            job_type: job.job_type,
            duration: job.duration,
            rate: job.rate,
            rate_type: job.rate_type,
            experience: job.experience_years,
            skills: job.skills,
            description: job.description,
            requirements: job.requirements,
            nice_to_have: job.nice_to_have,
            source: job.source,
            ai_confidence: job.ai_confidence,
            submissions_count: job.submissions_count,
            matches_count: job.matches_count,
            views_count: job.views_count,
            recruiter_assigned: job.recruiter_assigned,
            urgency: job.urgency,
            client_rating: job.client_rating,
            budget: job.budget,
            start_date: job.start_date.map(|t| t.to_rfc3339()),
            created_at: job.created_at.to_rfc3339(),
        }
    }
}
