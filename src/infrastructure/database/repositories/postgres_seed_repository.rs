use async_trait::async_trait;
use diesel::prelude::*;

use super::{query_error, run_blocking};
use crate::domain::repositories::{RepositoryError, SeedBatch, SeedRepository};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::{
    NewConsultantModel, NewEmailModel, NewJobRequirementModel,
};
use crate::infrastructure::database::schema::{consultants, emails, job_requirements};

pub struct PostgresSeedRepository {
    pool: DbPool,
}

impl PostgresSeedRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedRepository for PostgresSeedRepository {
    async fn load_if_empty(&self, batch: SeedBatch) -> Result<bool, RepositoryError> {
        for consultant in &batch.consultants {
            consultant.validate().map_err(RepositoryError::ValidationError)?;
        }
        for job in &batch.job_requirements {
            job.validate().map_err(RepositoryError::ValidationError)?;
        }

        run_blocking(&self.pool, move |conn| {
            conn.transaction::<bool, RepositoryError, _>(|conn| {
                let existing = consultants::table
                    .count()
                    .get_result::<i64>(conn)
                    .map_err(query_error("Failed to count consultants"))?;
                if existing > 0 {
                    return Ok(false);
                }

                let new_consultants: Vec<NewConsultantModel> = batch
                    .consultants
                    .into_iter()
                    .map(NewConsultantModel::from)
                    .collect();
                diesel::insert_into(consultants::table)
                    .values(&new_consultants)
                    .execute(conn)
                    .map_err(query_error("Failed to seed consultants"))?;

                let new_jobs: Vec<NewJobRequirementModel> = batch
                    .job_requirements
                    .into_iter()
                    .map(NewJobRequirementModel::from)
                    .collect();
                let job_ids = diesel::insert_into(job_requirements::table)
                    .values(&new_jobs)
                    .returning(job_requirements::id)
                    .get_results::<i32>(conn)
                    .map_err(query_error("Failed to seed job requirements"))?;

                let new_emails = batch
                    .emails
                    .into_iter()
                    .map(|email| email.resolve(&job_ids).map(NewEmailModel::from))
                    .collect::<Result<Vec<_>, _>>()?;
                diesel::insert_into(emails::table)
                    .values(&new_emails)
                    .execute(conn)
                    .map_err(query_error("Failed to seed emails"))?;

                Ok(true)
            })
        })
        .await
    }
}
