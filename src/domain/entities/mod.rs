pub mod consultant;
pub mod email;
pub mod job_match;
pub mod job_requirement;
pub mod submission;

pub use consultant::{Consultant, NewConsultant};
pub use email::{Email, NewEmail};
pub use job_match::{Match, MatchDetails};
pub use job_requirement::{JobRequirement, NewJobRequirement};
pub use submission::{Submission, SubmissionDetails};

#[cfg(test)]
pub use job_match::NewMatch;
#[cfg(test)]
pub use submission::NewSubmission;
