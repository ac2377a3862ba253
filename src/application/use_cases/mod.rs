pub mod check_health;
pub mod get_dashboard_stats;
pub mod get_recent_activity;
pub mod get_top_matches;
pub mod list_consultants;
pub mod list_emails;
pub mod list_job_requirements;
pub mod pagination;
pub mod remove_consultant;
pub mod remove_job_requirement;

pub use check_health::CheckHealthUseCase;
pub use get_dashboard_stats::GetDashboardStatsUseCase;
pub use get_recent_activity::GetRecentActivityUseCase;
pub use get_top_matches::GetTopMatchesUseCase;
pub use list_consultants::ListConsultantsUseCase;
pub use list_emails::ListEmailsUseCase;
pub use list_job_requirements::ListJobRequirementsUseCase;
pub use remove_consultant::RemoveConsultantUseCase;
pub use remove_job_requirement::RemoveJobRequirementUseCase;
