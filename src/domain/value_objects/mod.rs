pub mod email_status;
pub mod job_status;
pub mod match_score;

pub use email_status::EmailStatus;
pub use job_status::JobStatus;
pub use match_score::MatchScore;
