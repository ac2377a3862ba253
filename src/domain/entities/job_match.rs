use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Consultant, JobRequirement};
use crate::domain::value_objects::MatchScore;

/// A scored pairing of a consultant with a job requirement, produced by the
/// matching engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i32,
    pub consultant_id: i32,
    pub job_id: i32,
    pub match_score: MatchScore,
    pub is_active: bool,
    pub key_strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub consultant_id: i32,
    pub job_id: i32,
    pub match_score: MatchScore,
    pub is_active: bool,
    pub key_strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A match loaded together with both of its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetails {
    pub job_match: Match,
    pub consultant: Consultant,
    pub job: JobRequirement,
}

#[cfg(test)]
impl NewMatch {
    pub fn with_id(self, id: i32) -> Match {
        Match {
            id,
            consultant_id: self.consultant_id,
            job_id: self.job_id,
            match_score: self.match_score,
            is_active: self.is_active,
            key_strengths: self.key_strengths,
            concerns: self.concerns,
            created_at: self.created_at,
        }
    }
}
