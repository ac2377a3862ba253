use async_trait::async_trait;
use diesel::prelude::*;

use super::{conversion_error, query_error, run_blocking};
use crate::domain::entities::Consultant;
use crate::domain::repositories::{ConsultantRepository, RepositoryError};
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::ConsultantModel;
use crate::infrastructure::database::schema::consultants;

pub struct PostgresConsultantRepository {
    pool: DbPool,
}

impl PostgresConsultantRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConsultantRepository for PostgresConsultantRepository {
    async fn find_all(
        &self,
        active_only: bool,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Consultant>, RepositoryError> {
        let models = run_blocking(&self.pool, move |conn| {
            let mut query = consultants::table
                .select(ConsultantModel::as_select())
                .into_boxed();
            if active_only {
                query = query.filter(consultants::is_active.eq(true));
            }

            query
                .order((consultants::name.asc(), consultants::id.asc()))
                .offset(skip)
                .limit(limit)
                .load::<ConsultantModel>(conn)
                .map_err(query_error("Failed to list consultants"))
        })
        .await?;

        models
            .into_iter()
            .map(Consultant::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_error("consultant"))
    }

    async fn count(&self, active_only: bool) -> Result<i64, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let result = if active_only {
                consultants::table
                    .filter(consultants::is_active.eq(true))
                    .count()
                    .get_result::<i64>(conn)
            } else {
                consultants::table.count().get_result::<i64>(conn)
            };
            result.map_err(query_error("Failed to count consultants"))
        })
        .await
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // matches and submissions go with it through ON DELETE CASCADE
        let deleted = run_blocking(&self.pool, move |conn| {
            diesel::delete(consultants::table.find(id))
                .execute(conn)
                .map_err(query_error("Failed to delete consultant"))
        })
        .await?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }
}
