use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Consultant, JobRequirement};

/// A resume sent to a client. Historical record, never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i32,
    pub consultant_id: i32,
    pub job_id: i32,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub consultant_id: i32,
    pub job_id: i32,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDetails {
    pub submission: Submission,
    pub consultant: Consultant,
    pub job: JobRequirement,
}

impl Submission {
    pub fn was_sent_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.sent_at >= start && self.sent_at < end
    }
}

#[cfg(test)]
impl NewSubmission {
    pub fn with_id(self, id: i32) -> Submission {
        Submission {
            id,
            consultant_id: self.consultant_id,
            job_id: self.job_id,
            sent_at: self.sent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_sent_window_is_half_open() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(1);
        let at = |sent_at| Submission {
            id: 1,
            consultant_id: 1,
            job_id: 1,
            sent_at,
        };

        assert!(at(start).was_sent_within(start, end));
        assert!(at(end - Duration::seconds(1)).was_sent_within(start, end));
        assert!(!at(end).was_sent_within(start, end));
        assert!(!at(start - Duration::seconds(1)).was_sent_within(start, end));
    }
}
