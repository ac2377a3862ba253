use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::domain::entities::Submission;
use crate::infrastructure::database::schema::submissions;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable, Associations)]
#[diesel(belongs_to(super::ConsultantModel, foreign_key = consultant_id))]
#[diesel(belongs_to(super::JobRequirementModel, foreign_key = job_id))]
#[diesel(table_name = submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubmissionModel {
    pub id: i32,
    pub consultant_id: i32,
    pub job_id: i32,
    pub sent_at: DateTime<Utc>,
}

impl From<SubmissionModel> for Submission {
    fn from(model: SubmissionModel) -> Self {
        Submission {
            id: model.id,
            consultant_id: model.consultant_id,
            job_id: model.job_id,
            sent_at: model.sent_at,
        }
    }
}
