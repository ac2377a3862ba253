use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    New,
    Reviewed,
    Processed,
    Archived,
}

impl EmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::New => "new",
            EmailStatus::Reviewed => "reviewed",
            EmailStatus::Processed => "processed",
            EmailStatus::Archived => "archived",
        }
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(EmailStatus::New),
            "reviewed" => Ok(EmailStatus::Reviewed),
            "processed" => Ok(EmailStatus::Processed),
            "archived" => Ok(EmailStatus::Archived),
            _ => Err(format!("Invalid email status: {}", s)),
        }
    }
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
