use std::sync::Arc;

use crate::{
    application::{
        ports::Clock,
        use_cases::{
            CheckHealthUseCase, GetDashboardStatsUseCase, GetRecentActivityUseCase, GetTopMatchesUseCase,
            ListConsultantsUseCase, ListEmailsUseCase, ListJobRequirementsUseCase,
            RemoveConsultantUseCase, RemoveJobRequirementUseCase,
        },
    },
    domain::repositories::{
        ConsultantRepository, EmailRepository, JobRequirementRepository, MatchRepository,
        SeedRepository, SubmissionRepository,
    },
    infrastructure::{
        config::{AppConfig, ConfigError, StoreBackend},
        database::{
            create_connection_pool,
            repositories::{
                PostgresConsultantRepository, PostgresEmailRepository,
                PostgresJobRequirementRepository, PostgresMatchRepository, PostgresSeedRepository,
                PostgresSubmissionRepository,
            },
            run_migrations,
        },
        memory::InMemoryStore,
        seed::load_seed_data,
        system_clock::SystemClock,
    },
    presentation::http::{
        HttpServer,
        handlers::{
            ConsultantHandler, DashboardHandler, EmailHandler, HealthHandler,
            JobRequirementHandler,
        },
    },
};

/// One handle per repository trait, all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub consultant: Arc<dyn ConsultantRepository>,
    pub job_requirement: Arc<dyn JobRequirementRepository>,
    pub email: Arc<dyn EmailRepository>,
    pub job_match: Arc<dyn MatchRepository>,
    pub submission: Arc<dyn SubmissionRepository>,
    pub seed: Arc<dyn SeedRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());

        Self {
            consultant: store.clone(),
            job_requirement: store.clone(),
            email: store.clone(),
            job_match: store.clone(),
            submission: store.clone(),
            seed: store,
        }
    }

    pub fn postgres(database_url: &str, pool_size: u32) -> Result<Self, Box<dyn std::error::Error>> {
        run_migrations(database_url)?;
        let db_pool = create_connection_pool(database_url, pool_size)?;

        Ok(Self {
            consultant: Arc::new(PostgresConsultantRepository::new(db_pool.clone())),
            job_requirement: Arc::new(PostgresJobRequirementRepository::new(db_pool.clone())),
            email: Arc::new(PostgresEmailRepository::new(db_pool.clone())),
            job_match: Arc::new(PostgresMatchRepository::new(db_pool.clone())),
            submission: Arc::new(PostgresSubmissionRepository::new(db_pool.clone())),
            seed: Arc::new(PostgresSeedRepository::new(db_pool)),
        })
    }
}

pub struct AppContainer {
    pub repositories: Repositories,
    pub clock: Arc<dyn Clock>,
    pub server_port: u16,

    // HTTP Handlers
    pub health_handler: Arc<HealthHandler>,
    pub dashboard_handler: Arc<DashboardHandler>,
    pub consultant_handler: Arc<ConsultantHandler>,
    pub job_requirement_handler: Arc<JobRequirementHandler>,
    pub email_handler: Arc<EmailHandler>,
}

impl AppContainer {
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let repositories = match config.store_backend {
            StoreBackend::Postgres => {
                let database_url = config
                    .database_url
                    .as_deref()
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;
                Repositories::postgres(database_url, config.database_pool_size)?
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on shutdown");
                Repositories::in_memory()
            }
        };

        Ok(Self::with_repositories(
            repositories,
            config,
            Arc::new(SystemClock),
        ))
    }

    pub fn with_repositories(
        repositories: Repositories,
        config: &AppConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        // Create use cases
        let check_health_use_case =
            Arc::new(CheckHealthUseCase::new(repositories.consultant.clone()));

        let get_dashboard_stats_use_case = Arc::new(GetDashboardStatsUseCase::new(
            repositories.email.clone(),
            repositories.consultant.clone(),
            repositories.job_requirement.clone(),
            repositories.submission.clone(),
            clock.clone(),
        ));

        let get_recent_activity_use_case = Arc::new(GetRecentActivityUseCase::new(
            repositories.email.clone(),
            repositories.job_match.clone(),
            repositories.submission.clone(),
            config.activity_limits,
        ));

        let get_top_matches_use_case = Arc::new(GetTopMatchesUseCase::new(
            repositories.job_match.clone(),
            config.top_matches_limit,
        ));

        let list_consultants_use_case =
            Arc::new(ListConsultantsUseCase::new(repositories.consultant.clone()));
        let list_job_requirements_use_case = Arc::new(ListJobRequirementsUseCase::new(
            repositories.job_requirement.clone(),
        ));
        let list_emails_use_case = Arc::new(ListEmailsUseCase::new(repositories.email.clone()));

        let remove_consultant_use_case =
            Arc::new(RemoveConsultantUseCase::new(repositories.consultant.clone()));
        let remove_job_requirement_use_case = Arc::new(RemoveJobRequirementUseCase::new(
            repositories.job_requirement.clone(),
        ));

        // Create HTTP handlers
        let health_handler = Arc::new(HealthHandler::new(check_health_use_case));

        let dashboard_handler = Arc::new(DashboardHandler::new(
            get_dashboard_stats_use_case,
            get_recent_activity_use_case,
            get_top_matches_use_case,
        ));

        let consultant_handler = Arc::new(ConsultantHandler::new(
            list_consultants_use_case,
            remove_consultant_use_case,
        ));

        let job_requirement_handler = Arc::new(JobRequirementHandler::new(
            list_job_requirements_use_case,
            remove_job_requirement_use_case,
        ));

        let email_handler = Arc::new(EmailHandler::new(list_emails_use_case));

        Self {
            repositories,
            clock,
            server_port: config.server_port,
            health_handler,
            dashboard_handler,
            consultant_handler,
            job_requirement_handler,
            email_handler,
        }
    }

    pub async fn seed(&self) -> Result<bool, Box<dyn std::error::Error>> {
        let seeded = load_seed_data(self.repositories.seed.as_ref(), self.clock.now()).await?;
        Ok(seeded)
    }

    pub fn http_server(&self) -> HttpServer {
        HttpServer::new(
            self.health_handler.clone(),
            self.dashboard_handler.clone(),
            self.consultant_handler.clone(),
            self.job_requirement_handler.clone(),
            self.email_handler.clone(),
            self.server_port,
        )
    }
}
