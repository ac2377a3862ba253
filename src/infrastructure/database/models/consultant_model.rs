use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use super::json_list::{from_json_list, to_json_list};
use crate::domain::entities::{Consultant, NewConsultant};
use crate::infrastructure::database::schema::consultants;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable)]
#[diesel(table_name = consultants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ConsultantModel {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: serde_json::Value,
    pub experience_years: i32,
    pub location: Option<String>,
    pub rate: f64,
    pub rate_type: String,
    pub availability: String,
    pub last_submitted: Option<DateTime<Utc>>,
    pub rating: f64,
    pub total_submissions: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = consultants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewConsultantModel {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: serde_json::Value,
    pub experience_years: i32,
    pub location: Option<String>,
    pub rate: f64,
    pub rate_type: String,
    pub availability: String,
    pub last_submitted: Option<DateTime<Utc>>,
    pub rating: f64,
    pub total_submissions: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NewConsultant> for NewConsultantModel {
    fn from(consultant: NewConsultant) -> Self {
        Self {
            skills: to_json_list(&consultant.skills),
            name: consultant.name,
            email: consultant.email,
            phone: consultant.phone,
            experience_years: consultant.experience_years,
            location: consultant.location,
            rate: consultant.rate,
            rate_type: consultant.rate_type,
            availability: consultant.availability,
            last_submitted: consultant.last_submitted,
            rating: consultant.rating,
            total_submissions: consultant.total_submissions,
            is_active: consultant.is_active,
            created_at: consultant.created_at,
        }
    }
}

impl TryFrom<ConsultantModel> for Consultant {
    type Error = String;

    fn try_from(model: ConsultantModel) -> Result<Self, Self::Error> {
        Ok(Consultant {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            skills: from_json_list(model.skills)?,
            experience_years: model.experience_years,
            location: model.location,
            rate: model.rate,
            rate_type: model.rate_type,
            availability: model.availability,
            last_submitted: model.last_submitted,
            rating: model.rating,
            total_submissions: model.total_submissions,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
