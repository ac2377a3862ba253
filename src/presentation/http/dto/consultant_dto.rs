use serde::{Deserialize, Serialize};

use super::{PaginationMetaDto, default_limit};
use crate::domain::entities::Consultant;

#[derive(Debug, Deserialize)]
pub struct ConsultantQueryDto {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantResponseDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience: i32,
    pub location: Option<String>,
    pub rate: f64,
    pub rate_display: String,
    pub rate_type: String,
    pub availability: String,
    pub last_submitted: Option<String>,
    pub rating: f64,
    pub total_submissions: i32,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct ConsultantListResponseDto {
    pub consultants: Vec<ConsultantResponseDto>,
    pub meta: PaginationMetaDto,
}

impl From<Consultant> for ConsultantResponseDto {
    fn from(consultant: Consultant) -> Self {
        Self {
            rate_display: consultant.rate_display(),
            id: consultant.id,
            name: consultant.name,
            email: consultant.email,
            phone: consultant.phone,
            skills: consultant.skills,
            experience: consultant.experience_years,
            location: consultant.location,
            rate: consultant.rate,
            rate_type: consultant.rate_type,
            availability: consultant.availability,
            last_submitted: consultant.last_submitted.map(|t| t.to_rfc3339()),
            rating: consultant.rating,
            total_submissions: consultant.total_submissions,
            is_active: consultant.is_active,
            created_at: consultant.created_at.to_rfc3339(),
        }
    }
}
