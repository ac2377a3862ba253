use async_trait::async_trait;
use diesel::prelude::*;

use super::{conversion_error, query_error, run_blocking};
use crate::domain::entities::{Consultant, JobRequirement, Match, MatchDetails};
use crate::domain::repositories::{MatchRepository, RepositoryError};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::{
    ConsultantModel, JobRequirementModel, MatchModel,
};
use crate::infrastructure::database::schema::{consultants, job_requirements, matches};

type MatchRow = (MatchModel, ConsultantModel, JobRequirementModel);

pub struct PostgresMatchRepository {
    pool: DbPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn into_details(rows: Vec<MatchRow>) -> Result<Vec<MatchDetails>, RepositoryError> {
    rows.into_iter()
        .map(|(job_match, consultant, job)| {
            Ok(MatchDetails {
                job_match: Match::try_from(job_match).map_err(conversion_error("match"))?,
                consultant: Consultant::try_from(consultant)
                    .map_err(conversion_error("consultant"))?,
                job: JobRequirement::try_from(job).map_err(conversion_error("job requirement"))?,
            })
        })
        .collect()
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn find_recent_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| {
            matches::table
                .inner_join(consultants::table)
                .inner_join(job_requirements::table)
                .order((matches::created_at.desc(), matches::id.asc()))
                .limit(limit)
                .select((
                    MatchModel::as_select(),
                    ConsultantModel::as_select(),
                    JobRequirementModel::as_select(),
                ))
                .load::<MatchRow>(conn)
                .map_err(query_error("Failed to load recent matches"))
        })
        .await?;

        into_details(rows)
    }

    async fn find_top_active_with_details(
        &self,
        limit: i64,
    ) -> Result<Vec<MatchDetails>, RepositoryError> {
        let rows = run_blocking(&self.pool, move |conn| {
            matches::table
                .inner_join(consultants::table)
                .inner_join(job_requirements::table)
                .filter(matches::is_active.eq(true))
                .order((matches::match_score.desc(), matches::id.asc()))
                .limit(limit)
                .select((
                    MatchModel::as_select(),
                    ConsultantModel::as_select(),
                    JobRequirementModel::as_select(),
                ))
                .load::<MatchRow>(conn)
                .map_err(query_error("Failed to load top matches"))
        })
        .await?;

        into_details(rows)
    }
}
