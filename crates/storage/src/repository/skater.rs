use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Skater, SkaterName};

pub struct SkaterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SkaterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all skaters
    pub async fn list(&self) -> Result<Vec<Skater>> {
        let skaters = sqlx::query_as::<_, Skater>(
            r#"
            SELECT skater_id, first_name, last_name
            FROM skaters
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(skaters)
    }

    /// Find a skater by exact first and last name
    pub async fn find_by_name(&self, name: &SkaterName) -> Result<Option<Skater>> {
        let (first_name, last_name) = name.as_database_tuple();

        let skater = sqlx::query_as::<_, Skater>(
            r#"
            SELECT skater_id, first_name, last_name
            FROM skaters
            WHERE first_name = $1 AND last_name = $2
            ORDER BY skater_id
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(self.pool)
        .await?;

        Ok(skater)
    }
}
