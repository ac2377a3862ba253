use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::{conversion_error, query_error, run_blocking};
use crate::domain::entities::{Consultant, JobRequirement, Submission, SubmissionDetails};
use crate::domain::repositories::{RepositoryError, SubmissionRepository};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::{
    ConsultantModel, JobRequirementModel, SubmissionModel,
};
use crate::infrastructure::database::schema::{consultants, job_requirements, submissions};

pub struct PostgresSubmissionRepository {
    pool: DbPool,
}

impl PostgresSubmissionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn count_sent_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            submissions::table
                .filter(submissions::sent_at.ge(start))
                .filter(submissions::sent_at.lt(end))
                .count()
                .get_result::<i64>(conn)
                .map_err(query_error("Failed to count submissions"))
        })
        .await
    }

    async fn find_recent_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<SubmissionDetails>, RepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| {
            submissions::table
                .inner_join(consultants::table)
                .inner_join(job_requirements::table)
                .order((submissions::sent_at.desc(), submissions::id.asc()))
                .limit(limit)
                .select((
                    SubmissionModel::as_select(),
                    ConsultantModel::as_select(),
                    JobRequirementModel::as_select(),
                ))
                .load::<(SubmissionModel, ConsultantModel, JobRequirementModel)>(conn)
                .map_err(query_error("Failed to load recent submissions"))
        })
        .await?;

        rows.into_iter()
            .map(|(submission, consultant, job)| {
                Ok(SubmissionDetails {
                    submission: Submission::from(submission),
                    consultant: Consultant::try_from(consultant)
                        .map_err(conversion_error("consultant"))?,
                    job: JobRequirement::try_from(job)
                        .map_err(conversion_error("job requirement"))?,
                })
            })
            .collect()
    }
}
