use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::domain::entities::{Email, NewEmail};
use crate::domain::value_objects::EmailStatus;
use crate::infrastructure::database::schema::emails;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Identifiable, Associations)]
#[diesel(belongs_to(super::JobRequirementModel, foreign_key = related_job_id))]
#[diesel(table_name = emails)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmailModel {
    pub id: i32,
    pub from_address: String,
    pub from_name: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
    pub is_read: bool,
    pub status: String,
    pub priority: String,
    pub ai_confidence: i32,
    pub has_attachment: bool,
    pub category: Option<String>,
    pub related_job_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = emails)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewEmailModel {
    pub from_address: String,
    pub from_name: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
    pub is_read: bool,
    pub status: String,
    pub priority: String,
    pub ai_confidence: i32,
    pub has_attachment: bool,
    pub category: Option<String>,
    pub related_job_id: Option<i32>,
}

impl From<NewEmail> for NewEmailModel {
    fn from(email: NewEmail) -> Self {
        Self {
            status: email.status.as_str().to_string(),
            from_address: email.from_address,
            from_name: email.from_name,
            subject: email.subject,
            preview: email.preview,
            body: email.body,
            received_at: email.timestamp,
            is_read: email.is_read,
            priority: email.priority,
            ai_confidence: email.ai_confidence,
            has_attachment: email.has_attachment,
            category: email.category,
            related_job_id: email.related_job_id,
        }
    }
}

impl TryFrom<EmailModel> for Email {
    type Error = String;

    fn try_from(model: EmailModel) -> Result<Self, Self::Error> {
        Ok(Email {
            id: model.id,
            from_address: model.from_address,
            from_name: model.from_name,
            subject: model.subject,
            preview: model.preview,
            body: model.body,
            timestamp: model.received_at,
            is_read: model.is_read,
            status: EmailStatus::from_string(&model.status)?,
            priority: model.priority,
            ai_confidence: model.ai_confidence,
            has_attachment: model.has_attachment,
            category: model.category,
            related_job_id: model.related_job_id,
        })
    }
}
