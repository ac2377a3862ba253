use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EmailStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: i32,
    pub from_address: String,
    pub from_name: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub status: EmailStatus,
    pub priority: String,
    pub ai_confidence: i32,
    pub has_attachment: bool,
    pub category: Option<String>,
    pub related_job_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmail {
    pub from_address: String,
    pub from_name: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub status: EmailStatus,
    pub priority: String,
    pub ai_confidence: i32,
    pub has_attachment: bool,
    pub category: Option<String>,
    pub related_job_id: Option<i32>,
}

impl NewEmail {
    pub fn with_id(self, id: i32) -> Email {
        Email {
            id,
            from_address: self.from_address,
            from_name: self.from_name,
            subject: self.subject,
            preview: self.preview,
            body: self.body,
            timestamp: self.timestamp,
            is_read: self.is_read,
            status: self.status,
            priority: self.priority,
            ai_confidence: self.ai_confidence,
            has_attachment: self.has_attachment,
            category: self.category,
            related_job_id: self.related_job_id,
        }
    }
}
