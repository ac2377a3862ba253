use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Email, MatchDetails, SubmissionDetails};

/// Per-source caps applied before the merge, and the cap on the merged feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLimits {
    pub emails: usize,
    pub matches: usize,
    pub submissions: usize,
    pub total: usize,
}

impl Default for ActivityLimits {
    fn default() -> Self {
        Self {
            emails: 5,
            matches: 3,
            submissions: 3,
            total: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Email,
    Match,
    Submission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    New,
    Success,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub id: i32,
    pub kind: ActivityKind,
    pub message: String,
    pub time: DateTime<Utc>,
    pub state: ActivityState,
}

impl From<&Email> for ActivityItem {
    fn from(email: &Email) -> Self {
        Self {
            id: email.id,
            kind: ActivityKind::Email,
            message: format!("New job requirement received from {}", email.from_name),
            time: email.timestamp,
            state: ActivityState::New,
        }
    }
}

impl From<&MatchDetails> for ActivityItem {
    fn from(details: &MatchDetails) -> Self {
        Self {
            id: details.job_match.id,
            kind: ActivityKind::Match,
            message: format!(
                "AI found {}% match for {}",
                details.job_match.match_score, details.job.title
            ),
            time: details.job_match.created_at,
            state: ActivityState::Success,
        }
    }
}

impl From<&SubmissionDetails> for ActivityItem {
    fn from(details: &SubmissionDetails) -> Self {
        Self {
            id: details.submission.id,
            kind: ActivityKind::Submission,
            message: format!(
                "Resume submitted for {} to {}",
                details.consultant.name, details.job.client
            ),
            time: details.submission.sent_at,
            state: ActivityState::Pending,
        }
    }
}

/// Merges the three sources into one feed, newest first.
///
/// Each source is expected in its own recency order and is cut to its cap
/// before merging, so a busy source cannot take more than its share of the
/// feed. The sort is stable: on equal times emails precede matches, matches
/// precede submissions, and each source keeps its incoming order.
pub fn merge_activity(
    emails: &[Email],
    matches: &[MatchDetails],
    submissions: &[SubmissionDetails],
    limits: &ActivityLimits,
) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = emails
        .iter()
        .take(limits.emails)
        .map(ActivityItem::from)
        .chain(matches.iter().take(limits.matches).map(ActivityItem::from))
        .chain(
            submissions
                .iter()
                .take(limits.submissions)
                .map(ActivityItem::from),
        )
        .collect();

    feed.sort_by(|a, b| b.time.cmp(&a.time));
    feed.truncate(limits.total);
    feed
}
