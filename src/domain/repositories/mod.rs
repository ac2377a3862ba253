pub mod consultant_repository;
pub mod email_repository;
pub mod job_requirement_repository;
pub mod match_repository;
pub mod repository_error;
pub mod seed_repository;
pub mod submission_repository;

pub use consultant_repository::ConsultantRepository;
pub use email_repository::EmailRepository;
pub use job_requirement_repository::JobRequirementRepository;
pub use match_repository::MatchRepository;
pub use repository_error::RepositoryError;
pub use seed_repository::{SeedBatch, SeedEmail, SeedRepository};
pub use submission_repository::SubmissionRepository;
