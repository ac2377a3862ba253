use async_trait::async_trait;
use diesel::prelude::*;

use super::{conversion_error, query_error, run_blocking};
use crate::domain::entities::Email;
use crate::domain::repositories::{EmailRepository, RepositoryError};
use crate::domain::value_objects::EmailStatus;
use crate::infrastructure::database::DbPool;
use crate::infrastructure::database::models::EmailModel;
use crate::infrastructure::database::schema::emails;

pub struct PostgresEmailRepository {
    pool: DbPool,
}

impl PostgresEmailRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailRepository for PostgresEmailRepository {
    async fn find_all(
        &self,
        status: Option<EmailStatus>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Email>, RepositoryError> {
        let models = run_blocking(&self.pool, move |conn| {
            let mut query = emails::table.select(EmailModel::as_select()).into_boxed();
            if let Some(status) = status {
                query = query.filter(emails::status.eq(status.as_str()));
            }

            query
                .order((emails::received_at.desc(), emails::id.asc()))
                .offset(skip)
                .limit(limit)
                .load::<EmailModel>(conn)
                .map_err(query_error("Failed to list emails"))
        })
        .await?;

        models
            .into_iter()
            .map(Email::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(conversion_error("email"))
    }

    async fn count(&self, status: Option<EmailStatus>) -> Result<i64, RepositoryError> {
        run_blocking(&self.pool, move |conn| {
            let result = match status {
                Some(status) => emails::table
                    .filter(emails::status.eq(status.as_str()))
                    .count()
                    .get_result::<i64>(conn),
                None => emails::table.count().get_result::<i64>(conn),
            };
            result.map_err(query_error("Failed to count emails"))
        })
        .await
    }
}
