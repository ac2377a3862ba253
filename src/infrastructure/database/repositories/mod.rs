pub mod postgres_consultant_repository;
pub mod postgres_email_repository;
pub mod postgres_job_requirement_repository;
pub mod postgres_match_repository;
pub mod postgres_seed_repository;
pub mod postgres_submission_repository;

pub use postgres_consultant_repository::PostgresConsultantRepository;
pub use postgres_email_repository::PostgresEmailRepository;
pub use postgres_job_requirement_repository::PostgresJobRequirementRepository;
pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_seed_repository::PostgresSeedRepository;
pub use postgres_submission_repository::PostgresSubmissionRepository;

use diesel::PgConnection;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::DbPool;

/// Runs a diesel closure on the blocking pool with a connection checked out
/// from `pool`.
pub(crate) async fn run_blocking<T, F>(pool: &DbPool, op: F) -> Result<T, RepositoryError>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> Result<T, RepositoryError> + Send + 'static,
{
    let pool = pool.clone();

    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(|e| {
            RepositoryError::DatabaseError(format!("Failed to get database connection: {}", e))
        })?;
        op(&mut conn)
    })
    .await
    .map_err(|e| RepositoryError::DatabaseError(format!("Task join error: {}", e)))?
}

/// Constraint violations surface as validation errors, everything else as a
/// database error prefixed with `context`.
pub(crate) fn query_error(context: &'static str) -> impl Fn(DieselError) -> RepositoryError {
    move |e| match e {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation,
            info,
        ) => RepositoryError::ValidationError(info.message().to_string()),
        other => RepositoryError::DatabaseError(format!("{}: {}", context, other)),
    }
}

// Begin/commit failures inside `Connection::transaction`.
impl From<DieselError> for RepositoryError {
    fn from(error: DieselError) -> Self {
        query_error("Transaction failed")(error)
    }
}

pub(crate) fn conversion_error(entity: &'static str) -> impl Fn(String) -> RepositoryError {
    move |e| RepositoryError::DatabaseError(format!("Failed to convert {} model: {}", entity, e))
}
