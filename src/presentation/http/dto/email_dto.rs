use serde::{Deserialize, Serialize};

use super::{PaginationMetaDto, default_limit};
use crate::domain::entities::Email;

#[derive(Debug, Deserialize)]
pub struct EmailQueryDto {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponseDto {
    pub id: i32,
    pub from: String,
    pub from_name: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub timestamp: String,
    pub is_read: bool,
    pub status: String,
    pub priority: String,
    pub ai_confidence: i32,
    pub has_attachment: bool,
    pub category: Option<String>,
    pub related_job_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct EmailListResponseDto {
    pub emails: Vec<EmailResponseDto>,
    pub meta: PaginationMetaDto,
}

impl From<Email> for EmailResponseDto {
    fn from(email: Email) -> Self {
        Self {
            id: email.id,
            from: email.from_address,
            from_name: email.from_name,
            subject: email.subject,
            preview: email.preview,
            body: email.body,
            timestamp: email.timestamp.to_rfc3339(),
            is_read: email.is_read,
            status: email.status.to_string(),
            priority: email.priority,
            ai_confidence: email.ai_confidence,
            has_attachment: email.has_attachment,
            category: email.category,
            related_job_id: email.related_job_id,
        }
    }
}
