use async_trait::async_trait;
use diesel::prelude::*;

use super::{conversion_error, query_error, run_blocking};
use crate::domain::entities::JobRequirement;
use crate::domain::repositories::{JobRequirementRepository, RepositoryError};
use crate::domain::value_objects::JobStatus;
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::JobRequirementModel;
use crate::infrastructure::database::schema::job_requirements;

pub struct PostgresJobRequirementRepository {
    pool: DbPool,
}

impl PostgresJobRequirementRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRequirementRepository for PostgresJobRequirementRepository {
    async fn find_all(
        &self,
        status: Option<JobStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<JobRequirement>, RepositoryError> {
        let models = run_blocking(&self.pool, move |conn| {
            let mut query = job_requirements::table
                .select(JobRequirementModel::as_select())
                .into_boxed();
            if let Some(status) = status {
                query = query.filter(job_requirements::status.eq(status.as_str()));
            }

            query
                .order((job_requirements::created_at.desc(), job_requirements::id.asc()))
                .offset(skip)
                .limit(limit)
                .load::<JobRequirementModel>(conn)
                .map_err(query_error("Failed to list job requirements"))
        })
        .await?;

        models
            .into_iter()
            .map(JobRequirement::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_error("job requirement"))
    }

    async fn count(&self, status: Option<JobStatus>) -> Result<i64, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let result = match status {
                Some(status) => job_requirements::table
                    .filter(job_requirements::status.eq(status.as_str()))
                    .count()
                    .get_result::<i64>(conn),
                None => job_requirements::table.count().get_result::<i64>(conn),
            };
            result.map_err(query_error("Failed to count job requirements"))
        })
        .await
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // matches and submissions cascade, emails.related_job_id is set to NULL
        let deleted = run_blocking(&self.pool, move |conn| {
            diesel::delete(job_requirements::table.find(id))
                .execute(conn)
                .map_err(query_error("Failed to delete job requirement"))
        })
        .await?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }
}
