use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{NewConsultant, NewEmail, NewJobRequirement};
use crate::domain::repositories::{RepositoryError, SeedBatch, SeedEmail, SeedRepository};
use crate::domain::value_objects::{EmailStatus, JobStatus};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn consultant(
    name: &str,
    email: &str,
    phone: &str,
    skills: &[&str],
    experience_years: i32,
    location: &str,
    rate: f64,
    availability: &str,
    last_submitted: DateTime<Utc>,
    rating: f64,
    total_submissions: i32,
    now: DateTime<Utc>,
) -> NewConsultant {
    NewConsultant {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        skills: strings(skills),
        experience_years,
        location: Some(location.to_string()),
        rate,
        rate_type: "Hourly".to_string(),
        availability: availability.to_string(),
        last_submitted: Some(last_submitted),
        rating,
        total_submissions,
        is_active: true,
        created_at: now,
    }
}

fn seed_consultants(now: DateTime<Utc>) -> Vec<NewConsultant> {
    vec![
        consultant(
            "Alex Rodriguez",
            "alex.rodriguez@email.com",
            "+1 (555) 123-4567",
            &["React", "Node.js", "AWS", "TypeScript", "GraphQL"],
            8,
            "New York, NY",
            85.0,
            "Available",
            now - Duration::days(5),
            4.8,
            23,
            now,
        ),
        consultant(
            "Maria Chen",
            "maria.chen@email.com",
            "+1 (555) 234-5678",
            &["Docker", "Kubernetes", "CI/CD", "Python", "Terraform"],
            6,
            "San Francisco, CA",
            90.0,
            "On Project",
            now - Duration::days(7),
            4.9,
            18,
            now,
        ),
        consultant(
            "David Kim",
            "david.kim@email.com",
            "+1 (555) 345-6789",
            &["Python", "Machine Learning", "TensorFlow", "SQL", "R"],
            5,
            "Austin, TX",
            95.0,
            "Available",
            now - Duration::days(2),
            4.7,
            15,
            now,
        ),
    ]
}

fn seed_jobs(now: DateTime<Utc>) -> Vec<NewJobRequirement> {
    vec![
        NewJobRequirement {
            title: "Senior React Developer".to_string(),
            client: "TechCorp Inc.".to_string(),
            client_contact: Some("Sarah Johnson".to_string()),
            client_email: Some("hiring@techcorp.com".to_string()),
            client_phone: Some("+1 (555) 123-4567".to_string()),
            status: JobStatus::Active,
            priority: "High".to_string(),
            location: Some("Remote".to_string()),
            job_type: "Contract".to_string(),
            duration: Some("6 months".to_string()),
            rate: Some("$80-100/hour".to_string()),
            rate_type: "Hourly".to_string(),
            experience_years: 5,
            skills: strings(&["React", "TypeScript", "Node.js", "AWS", "GraphQL"]),
            description: "We are looking for a Senior React Developer with extensive experience \
                          in modern React development, TypeScript, and cloud technologies."
                .to_string(),
            requirements: strings(&[
                "5+ years of React development experience",
                "Strong TypeScript skills",
                "Experience with Node.js and Express",
                "AWS cloud platform knowledge",
                "GraphQL API development",
            ]),
            nice_to_have: strings(&[
                "Next.js experience",
                "Docker containerization",
                "CI/CD pipeline setup",
            ]),
            source: Some("email_extraction".to_string()),
            ai_confidence: 95,
            submissions_count: 8,
            matches_count: 12,
            views_count: 45,
            recruiter_assigned: Some("John Doe".to_string()),
            urgency: Some("High".to_string()),
            client_rating: Some(4.8),
            budget: Some(50_000.0),
            start_date: Some(now + Duration::days(15)),
            created_at: now,
        },
        NewJobRequirement {
            title: "DevOps Engineer".to_string(),
            client: "Innovate Solutions".to_string(),
            client_contact: Some("Mike Chen".to_string()),
            client_email: Some("mike@innovate.com".to_string()),
            client_phone: Some("+1 (555) 234-5678".to_string()),
            status: JobStatus::Active,
            priority: "Medium".to_string(),
            location: Some("San Francisco, CA".to_string()),
            job_type: "Full-time".to_string(),
            duration: Some("Permanent".to_string()),
            rate: Some("$120,000-150,000".to_string()),
            rate_type: "Annual".to_string(),
            experience_years: 4,
            skills: strings(&["Docker", "Kubernetes", "CI/CD", "Python", "Terraform"]),
            description: "Looking for a DevOps Engineer to join our growing team. You will be \
                          responsible for maintaining our cloud infrastructure."
                .to_string(),
            requirements: strings(&[
                "4+ years of DevOps experience",
                "Strong Docker and Kubernetes skills",
                "CI/CD pipeline implementation",
                "Python scripting abilities",
                "Infrastructure as Code (Terraform)",
            ]),
            nice_to_have: strings(&[
                "AWS certification",
                "Monitoring tools experience",
                "Security best practices",
            ]),
            source: Some("email_extraction".to_string()),
            ai_confidence: 88,
            submissions_count: 5,
            matches_count: 8,
            views_count: 32,
            recruiter_assigned: Some("Jane Smith".to_string()),
            urgency: Some("Medium".to_string()),
            client_rating: Some(4.6),
            budget: Some(135_000.0),
            start_date: Some(now + Duration::days(30)),
            created_at: now,
        },
    ]
}

fn seed_email(email: NewEmail, job_index: usize) -> SeedEmail {
    SeedEmail {
        email,
        job_index: Some(job_index),
    }
}

// Job indexes refer to the order of `seed_jobs`.
fn seed_emails(now: DateTime<Utc>) -> Vec<SeedEmail> {
    vec![
        seed_email(
            NewEmail {
                from_address: "hiring@techcorp.com".to_string(),
                from_name: "Sarah Johnson - TechCorp".to_string(),
                subject: "Urgent: Senior React Developer Position - Remote".to_string(),
                preview: "We have an immediate need for a Senior React Developer with 5+ years \
                          experience..."
                    .to_string(),
                body: "We have an immediate need for a Senior React Developer with 5+ years \
                       experience in modern React, TypeScript, and Node.js. The role is fully \
                       remote and offers competitive compensation."
                    .to_string(),
                timestamp: now - Duration::hours(2),
                is_read: false,
                status: EmailStatus::New,
                priority: "High".to_string(),
                ai_confidence: 95,
                has_attachment: true,
                category: Some("job_requirement".to_string()),
                related_job_id: None,
            },
            0,
        ),
        seed_email(
            NewEmail {
                from_address: "recruiter@innovate.com".to_string(),
                from_name: "Mike Chen - Innovate Solutions".to_string(),
                subject: "DevOps Engineer - San Francisco".to_string(),
                preview: "Looking for a DevOps Engineer with Docker and Kubernetes experience..."
                    .to_string(),
                body: "Looking for a DevOps Engineer with Docker and Kubernetes experience to \
                       join our team in San Francisco."
                    .to_string(),
                timestamp: now - Duration::hours(3),
                is_read: false,
                status: EmailStatus::New,
                priority: "Medium".to_string(),
                ai_confidence: 88,
                has_attachment: false,
                category: Some("job_requirement".to_string()),
                related_job_id: None,
            },
            1,
        ),
    ]
}

fn seed_batch(now: DateTime<Utc>) -> SeedBatch {
    SeedBatch {
        consultants: seed_consultants(now),
        job_requirements: seed_jobs(now),
        emails: seed_emails(now),
    }
}

/// Loads the demo fixtures as one unit when the consultant collection is
/// empty.
///
/// Returns `false` without writing anything when data is already present. A
/// failed load leaves no partial rows behind, so the next start retries.
pub async fn load_seed_data(
    seed_repository: &dyn SeedRepository,
    now: DateTime<Utc>,
) -> Result<bool, RepositoryError> {
    let batch = seed_batch(now);
    let (consultants, jobs, emails) = (
        batch.consultants.len(),
        batch.job_requirements.len(),
        batch.emails.len(),
    );

    if !seed_repository.load_if_empty(batch).await? {
        tracing::warn!("Skipping seed data: store already holds consultants");
        return Ok(false);
    }

    tracing::info!(
        "Seed data loaded: {} consultants, {} job requirements, {} emails",
        consultants,
        jobs,
        emails
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::ports::clock::FixedClock;
    use crate::application::use_cases::GetDashboardStatsUseCase;
    use crate::application::use_cases::get_dashboard_stats::DashboardStats;
    use crate::domain::repositories::{
        ConsultantRepository, EmailRepository, JobRequirementRepository,
    };
    use crate::infrastructure::memory::InMemoryStore;
    use crate::test_support::{self, FailingStore};

    fn stats_use_case(store: &Arc<InMemoryStore>) -> GetDashboardStatsUseCase {
        GetDashboardStatsUseCase::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(FixedClock(test_support::now())),
        )
    }

    async fn collection_sizes(store: &InMemoryStore) -> (i64, i64, i64) {
        (
            ConsultantRepository::count(store, false).await.unwrap(),
            JobRequirementRepository::count(store, None).await.unwrap(),
            EmailRepository::count(store, None).await.unwrap(),
        )
    }

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let store = Arc::new(InMemoryStore::new());

        let seeded = load_seed_data(store.as_ref(), test_support::now())
            .await
            .unwrap();
        assert!(seeded);

        let stats = stats_use_case(&store).execute().await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                new_emails: 2,
                active_consultants: 3,
                active_job_requirements: 2,
                submissions_today: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_seed_links_emails_to_jobs() {
        let store = InMemoryStore::new();
        load_seed_data(&store, test_support::now()).await.unwrap();

        let emails = EmailRepository::find_all(&store, None, 0, 10).await.unwrap();
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].from_name, "Sarah Johnson - TechCorp");
        for email in &emails {
            let job_id = email.related_job_id.unwrap();
            assert!(store.has_job(job_id).await);
        }
    }

    #[tokio::test]
    async fn test_second_seed_run_is_a_no_op() {
        let store = InMemoryStore::new();
        let now = test_support::now();

        assert!(load_seed_data(&store, now).await.unwrap());
        assert!(!load_seed_data(&store, now).await.unwrap());

        assert_eq!(collection_sizes(&store).await, (3, 2, 2));
    }

    #[tokio::test]
    async fn test_failed_email_insert_leaves_store_empty_for_retry() {
        let store = InMemoryStore::new();
        let now = test_support::now();
        let mut batch = seed_batch(now);
        let stray = batch.emails[0].email.clone();
        batch.emails.push(SeedEmail {
            email: stray,
            job_index: Some(batch.job_requirements.len()),
        });

        assert!(store.load_if_empty(batch).await.is_err());
        assert_eq!(collection_sizes(&store).await, (0, 0, 0));

        assert!(load_seed_data(&store, now).await.unwrap());
        assert_eq!(collection_sizes(&store).await, (3, 2, 2));
    }

    #[tokio::test]
    async fn test_store_error_is_propagated() {
        let result = load_seed_data(&FailingStore, test_support::now()).await;

        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
    }
}
