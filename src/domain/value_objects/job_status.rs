use serde::{Deserialize, Serialize};

/// Lifecycle label of a job requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    OnHold,
    Filled,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::OnHold => "on_hold",
            JobStatus::Filled => "filled",
            JobStatus::Closed => "closed",
        }
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "active" => Ok(JobStatus::Active),
            "on_hold" => Ok(JobStatus::OnHold),
            "filled" => Ok(JobStatus::Filled),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_label_variants() {
        assert_eq!(JobStatus::from_string("active").unwrap(), JobStatus::Active);
        assert_eq!(JobStatus::from_string("On Hold").unwrap(), JobStatus::OnHold);
        assert_eq!(JobStatus::from_string("on-hold").unwrap(), JobStatus::OnHold);
        assert!(JobStatus::from_string("archived").is_err());
    }
}
