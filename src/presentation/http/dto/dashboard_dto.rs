use serde::Serialize;

use crate::application::services::{ActivityItem, ActivityKind, ActivityState};
use crate::application::use_cases::get_dashboard_stats::DashboardStats;
use crate::application::use_cases::get_top_matches::TopMatch;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub new_emails: i64,
    pub active_consultants: i64,
    pub active_job_requirements: i64,
    pub submissions_today: i64,
}

#[derive(Debug, Serialize)]
pub struct ActivityItemDto {
    pub id: i32,
    pub kind: ActivityKind,
    pub message: String,
    pub time: String,
    pub state: ActivityState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMatchDto {
    pub consultant_name: String,
    pub job_title: String,
    pub score: i32,
    pub top_skills: Vec<String>,
    pub rate_display: String,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(stats: DashboardStats) -> Self {
        Self {
            new_emails: stats.new_emails,
            active_consultants: stats.active_consultants,
            active_job_requirements: stats.active_job_requirements,
            submissions_today: stats.submissions_today,
        }
    }
}

impl From<ActivityItem> for ActivityItemDto {
    fn from(item: ActivityItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            message: item.message,
            time: item.time.to_rfc3339(),
            state: item.state,
        }
    }
}

impl From<TopMatch> for TopMatchDto {
    fn from(top_match: TopMatch) -> Self {
        Self {
            consultant_name: top_match.consultant_name,
            job_title: top_match.job_title,
            score: top_match.score,
            top_skills: top_match.top_skills,
            rate_display: top_match.rate_display,
        }
    }
}
