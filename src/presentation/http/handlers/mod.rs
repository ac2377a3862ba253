pub mod consultant_handler;
pub mod dashboard_handler;
pub mod email_handler;
pub mod health_handler;
pub mod job_requirement_handler;

pub use consultant_handler::ConsultantHandler;
pub use dashboard_handler::DashboardHandler;
pub use email_handler::EmailHandler;
pub use health_handler::HealthHandler;
pub use job_requirement_handler::JobRequirementHandler;
