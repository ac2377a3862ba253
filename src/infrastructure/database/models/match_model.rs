use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use super::json_list::from_json_list;
use crate::domain::entities::Match;
use crate::domain::value_objects::MatchScore;
use crate::infrastructure::database::schema::matches;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable, Associations)]
#[diesel(belongs_to(super::ConsultantModel, foreign_key = consultant_id))]
#[diesel(belongs_to(super::JobRequirementModel, foreign_key = job_id))]
#[diesel(table_name = matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchModel {
    pub id: i32,
    pub consultant_id: i32,
    pub job_id: i32,
    pub match_score: i32,
    pub is_active: bool,
    pub key_strengths: serde_json::Value,
    pub concerns: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MatchModel> for Match {
    type Error = String;

    fn try_from(model: MatchModel) -> Result<Self, Self::Error> {
        Ok(Match {
            id: model.id,
            consultant_id: model.consultant_id,
            job_id: model.job_id,
            match_score: MatchScore::new(model.match_score)?,
            is_active: model.is_active,
            key_strengths: from_json_list(model.key_strengths)?,
            concerns: from_json_list(model.concerns)?,
            created_at: model.created_at,
        })
    }
}
