use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultant {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Display order is the stored order.
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub location: Option<String>,
    pub rate: f64,
    pub rate_type: String,
    pub availability: String,
    pub last_submitted: Option<DateTime<Utc>>,
    pub rating: f64,
    pub total_submissions: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A consultant that has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConsultant {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: i32,
    pub location: Option<String>,
    pub rate: f64,
    pub rate_type: String,
    pub availability: String,
    pub last_submitted: Option<DateTime<Utc>>,
    pub rating: f64,
    pub total_submissions: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Consultant {
    pub fn top_skills(&self, count: usize) -> Vec<String> {
        self.skills.iter().take(count).cloned().collect()
    }

    pub fn rate_display(&self) -> String {
        format!("${}/hr", format_amount(self.rate))
    }
}

impl NewConsultant {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Consultant name cannot be empty".to_string());
        }

        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(format!("Consultant rate must be positive, got {}", self.rate));
        }

        if self.total_submissions < 0 {
            return Err("Total submissions cannot be negative".to_string());
        }

        Ok(())
    }

    pub fn with_id(self, id: i32) -> Consultant {
        Consultant {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            experience_years: self.experience_years,
            location: self.location,
            rate: self.rate,
            rate_type: self.rate_type,
            availability: self.availability,
            last_submitted: self.last_submitted,
            rating: self.rating,
            total_submissions: self.total_submissions,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

// Whole amounts print without decimals, fractional ones with at most two.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        let formatted = format!("{:.2}", amount);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consultant(rate: f64, skills: &[&str]) -> Consultant {
        NewConsultant {
            name: "Alex Rodriguez".to_string(),
            email: "alex.rodriguez@email.com".to_string(),
            phone: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: 8,
            location: Some("New York, NY".to_string()),
            rate,
            rate_type: "Hourly".to_string(),
            availability: "Available".to_string(),
            last_submitted: None,
            rating: 4.8,
            total_submissions: 23,
            is_active: true,
            created_at: Utc::now(),
        }
        .with_id(1)
    }

    #[test]
    fn test_top_skills_keeps_stored_order() {
        let c = consultant(85.0, &["React", "Node.js", "AWS", "TypeScript"]);
        assert_eq!(c.top_skills(3), vec!["React", "Node.js", "AWS"]);
    }

    #[test]
    fn test_top_skills_with_fewer_skills() {
        let c = consultant(85.0, &["Rust"]);
        assert_eq!(c.top_skills(3), vec!["Rust"]);
        assert!(consultant(85.0, &[]).top_skills(3).is_empty());
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(consultant(85.0, &[]).rate_display(), "$85/hr");
        assert_eq!(consultant(85.5, &[]).rate_display(), "$85.5/hr");
        assert_eq!(consultant(92.25, &[]).rate_display(), "$92.25/hr");
    }

    #[test]
    fn test_validation_rejects_non_positive_rate() {
        let mut draft = NewConsultant {
            name: "Maria Chen".to_string(),
            email: "maria.chen@email.com".to_string(),
            phone: None,
            skills: vec![],
            experience_years: 6,
            location: None,
            rate: 0.0,
            rate_type: "Hourly".to_string(),
            availability: "On Project".to_string(),
            last_submitted: None,
            rating: 4.9,
            total_submissions: 18,
            is_active: true,
            created_at: Utc::now(),
        };
        assert!(draft.validate().is_err());

        draft.rate = 90.0;
        assert!(draft.validate().is_ok());
    }
}
